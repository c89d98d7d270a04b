use super::{ApplicationMiddleware, ApplicationState};
use crate::routing::routing;
use axum::Router;
use std::path::Path;

pub fn create_application(
    application_state: ApplicationState,
    application_middleware: ApplicationMiddleware,
    upload_directory: &Path,
) -> Router {
    routing(upload_directory)
        .with_state(application_state)
        .layer(application_middleware.default_body_limit)
        .layer(application_middleware.body_limit)
        .layer(application_middleware.cors)
        .layer(application_middleware.trace)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::service::registrations_service::MockRegistrationsService;
    use axum::{
        body::{to_bytes, Body, Bytes},
        extract::DefaultBodyLimit,
        http::{header::CONTENT_TYPE, Request, StatusCode},
    };
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;
    use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

    const BOUNDARY: &str = "application-test-boundary";

    fn create_limited_application(max_http_content_len: usize) -> Router {
        let application_state = ApplicationState {
            registrations_service: Arc::new(MockRegistrationsService::new()),
        };
        let application_middleware = ApplicationMiddleware {
            trace: TraceLayer::new_for_http(),
            cors: CorsLayer::permissive(),
            default_body_limit: DefaultBodyLimit::disable(),
            body_limit: RequestBodyLimitLayer::new(max_http_content_len),
        };

        create_application(
            application_state,
            application_middleware,
            &std::env::temp_dir().join("application_test_uploads"),
        )
    }

    #[tokio::test]
    async fn chunked_upload_over_limit_payload_too_large() {
        let application = create_limited_application(1024);

        // no Content-Length, the limit is hit while reading the file part
        let mut chunks = vec![Bytes::from(format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"fullName\"\r\n\r\nAmina Diallo\r\n\
             --{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"badge.pdf\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        ))];
        chunks.extend((0..8).map(|_| Bytes::from(vec![b'0'; 512])));
        chunks.push(Bytes::from(format!("\r\n--{BOUNDARY}--\r\n")));
        let body = Body::from_stream(futures_util::stream::iter(
            chunks.into_iter().map(Ok::<_, std::io::Error>),
        ));

        let response = application
            .oneshot(
                Request::post("/api/register")
                    .header(
                        CONTENT_TYPE,
                        format!("multipart/form-data; boundary={BOUNDARY}"),
                    )
                    .body(body)
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice::<Value>(&body).unwrap();
        assert!(body.get("message").unwrap().is_string());
    }

    #[tokio::test]
    async fn content_length_over_limit_payload_too_large() {
        let application = create_limited_application(16);

        let response = application
            .oneshot(
                Request::post("/api/register")
                    .header(
                        CONTENT_TYPE,
                        format!("multipart/form-data; boundary={BOUNDARY}"),
                    )
                    .header("content-length", "64")
                    .body(Body::from(vec![b'0'; 64]))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
