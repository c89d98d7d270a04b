use crate::error::Error;
use axum::async_trait;
use std::path::PathBuf;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QrCodeService: Send + Sync {
    ///
    /// Renders QR code of the ticket into `<ticket_code>.png`
    ///
    /// `/`, `\` and NUL in the ticket code are replaced by `_` in the file name,
    /// so for such codes the served image name differs from the ticket code.
    ///
    /// Images of equal ticket codes are identical and share one file.
    /// The file is replaced atomically, readers never see a partial image.
    ///
    /// ### Returns
    /// Path of the written image
    ///
    /// ### Errors
    /// - [Error::QrCodeEncoding] when the content does not fit into a QR code
    /// - [Error::QrCodeImage] when PNG encoding fails
    /// - [Error::Storage] when the image cannot be written
    ///
    async fn render(&self, ticket_code: &str) -> Result<PathBuf, Error>;
}
