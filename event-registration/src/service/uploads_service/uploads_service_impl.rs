use super::{StoredFile, UploadsService, UploadsServiceConfig};
use crate::error::Error;
use axum::async_trait;
use std::path::Path;
use time::OffsetDateTime;

const FALLBACK_FILE_NAME: &str = "upload";

pub struct UploadsServiceImpl {
    config: UploadsServiceConfig,
}

impl UploadsServiceImpl {
    pub fn new(config: UploadsServiceConfig) -> Self {
        Self { config }
    }

    ///
    /// Keeps only the last path component, clients may send
    /// full paths (also with Windows separators)
    ///
    fn base_name(file_name: &str) -> &str {
        match file_name.rsplit(|c: char| c == '/' || c == '\\').next() {
            Some(name) if !name.is_empty() && name != "." && name != ".." => name,
            _ => FALLBACK_FILE_NAME,
        }
    }

    fn stored_file_name(file_name: &str) -> String {
        let timestamp = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;

        format!("{timestamp}-{}", Self::base_name(file_name))
    }
}

#[async_trait]
impl UploadsService for UploadsServiceImpl {
    async fn save(&self, file_name: &str, content: &[u8]) -> Result<StoredFile, Error> {
        let stored_file_name = Self::stored_file_name(file_name);
        let path = self.config.directory.join(&stored_file_name);

        tracing::info!(path = %path.display(), size = content.len(), "saving uploaded file");
        tokio::fs::write(&path, content).await?;

        let uri = format!(
            "{}/{}",
            self.config.public_path.trim_end_matches('/'),
            stored_file_name
        );

        Ok(StoredFile { path, uri })
    }

    async fn remove(&self, path: &Path) {
        match tokio::fs::remove_file(path).await {
            Ok(()) => tracing::info!(path = %path.display(), "removed file"),
            Err(err) => tracing::warn!(path = %path.display(), %err, "failed to remove file"),
        }
    }
}
