use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationsService: Send + Sync {
    ///
    /// Registers participant to the event.
    ///
    /// Steps run in order: validation, upload storage, ticket code,
    /// QR code, persistence, confirmation mail.
    ///
    /// ### Returns
    /// [output::RegistrationCreated] with the issued ticket code
    ///
    /// ### Errors
    /// - [Error::Validation] when any of the text fields is missing or blank,
    ///   nothing is written in that case
    /// - [Error::Storage], [Error::QrCodeEncoding], [Error::QrCodeImage]
    ///   when files cannot be produced
    /// - [Error::Database] when registration cannot be saved
    /// - [Error::Mail] when confirmation cannot be sent,
    ///   registration stays saved in that case
    ///
    async fn register(
        &self,
        form: input::RegistrationForm,
    ) -> Result<output::RegistrationCreated, Error>;
}
