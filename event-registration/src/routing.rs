use crate::{
    application::ApplicationState,
    dto::{input, output},
    error::Error,
    service::registrations_service::RegistrationsService,
};
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::{path::Path, sync::Arc};
use tower_http::services::ServeDir;

const WELCOME_MESSAGE: &str = "Bienvenue sur la plateforme Charity & Hope Africa Empowerment 🌍";

pub fn routing(upload_directory: &Path) -> Router<ApplicationState> {
    Router::new()
        .route("/", get(get_root))
        .route("/api/register", post(post_registration))
        .nest_service("/uploads", ServeDir::new(upload_directory))
}

async fn get_root() -> &'static str {
    WELCOME_MESSAGE
}

async fn post_registration(
    State(registrations_service): State<Arc<dyn RegistrationsService>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<output::RegistrationCreated>), Error> {
    let form = input::RegistrationForm::from_multipart(multipart?).await?;

    let registration_created = registrations_service.register(form).await?;

    Ok((StatusCode::CREATED, Json(registration_created)))
}
