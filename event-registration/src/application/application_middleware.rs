use super::ApplicationEnv;
use axum::extract::DefaultBodyLimit;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

pub struct ApplicationMiddleware {
    pub trace: TraceLayer<SharedClassifier<ServerErrorsAsFailures>>,
    pub cors: CorsLayer,
    /// Replaces axum's default 2MB limit so multipart uploads
    /// are bounded by the configured size only
    pub default_body_limit: DefaultBodyLimit,
    pub body_limit: RequestBodyLimitLayer,
}

pub fn create_middleware(env: &ApplicationEnv) -> ApplicationMiddleware {
    let trace = TraceLayer::new_for_http();

    let cors = CorsLayer::permissive();

    let default_body_limit = DefaultBodyLimit::disable();
    let body_limit = RequestBodyLimitLayer::new(env.max_http_content_len);

    ApplicationMiddleware {
        trace,
        cors,
        default_body_limit,
        body_limit,
    }
}
