use super::{ConfirmationMail, Error};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailService: Send + Sync {
    ///
    /// Sends registration confirmation with the QR code attached.
    /// Attachment is read from [ConfirmationMail::qr_code_path].
    ///
    async fn send_confirmation(&self, mail: ConfirmationMail) -> Result<(), Error>;
}
