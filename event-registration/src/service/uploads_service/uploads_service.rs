use super::StoredFile;
use crate::error::Error;
use axum::async_trait;
use std::path::Path;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UploadsService: Send + Sync {
    ///
    /// Stores file uploaded with the registration.
    ///
    /// ### Returns
    /// [StoredFile] named `<unix-millis>-<file name>`
    ///
    /// ### Errors
    /// - [Error::Storage] when the file cannot be written
    ///
    async fn save(&self, file_name: &str, content: &[u8]) -> Result<StoredFile, Error>;

    ///
    /// Removes file written for a registration that was not persisted.
    /// Failures are logged and otherwise ignored.
    ///
    async fn remove(&self, path: &Path);
}
