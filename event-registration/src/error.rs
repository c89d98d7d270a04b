use crate::{dto::output, repository, service::mail_service};
use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

const INTERNAL_ERROR_MESSAGE: &str = "Erreur serveur lors de l'inscription.";
const INVALID_FORM_MESSAGE: &str = "Formulaire d'inscription invalide.";
const TOO_LARGE_MESSAGE: &str = "Formulaire d'inscription trop volumineux.";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(&'static str),

    #[error("multipart error: {0}")]
    Multipart(#[from] MultipartError),

    #[error("multipart rejection: {0}")]
    MultipartRejection(#[from] MultipartRejection),

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("qr code encoding error: {0}")]
    QrCodeEncoding(#[from] qrcode::types::QrError),

    #[error("qr code image error: {0}")]
    QrCodeImage(#[from] image::ImageError),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),

    #[error("mail error: {0}")]
    Mail(#[from] mail_service::Error),

    ///
    /// This error should be returned only in situations
    /// that should never occur when system is setup correctly.
    ///
    #[error("unexpected error: {0}")]
    UnexpectedError(#[from] anyhow::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Error::Validation(message) => (StatusCode::BAD_REQUEST, *message),
            Error::Multipart(err) => {
                let status = err.status();
                if status == StatusCode::PAYLOAD_TOO_LARGE {
                    (status, TOO_LARGE_MESSAGE)
                } else if status.is_server_error() {
                    (status, INTERNAL_ERROR_MESSAGE)
                } else {
                    (StatusCode::BAD_REQUEST, INVALID_FORM_MESSAGE)
                }
            }
            Error::MultipartRejection(_) => (StatusCode::BAD_REQUEST, INVALID_FORM_MESSAGE),
            Error::Storage(_)
            | Error::QrCodeEncoding(_)
            | Error::QrCodeImage(_)
            | Error::Database(_)
            | Error::Mail(_)
            | Error::UnexpectedError(_) => (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE),
        };

        match status.is_server_error() {
            true => tracing::error!(err = %self),
            false => tracing::warn!(err = %self),
        }

        let body = output::Message {
            message: message.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
