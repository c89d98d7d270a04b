use super::{QrCodeService, QrCodeServiceConfig};
use crate::error::Error;
use axum::async_trait;
use image::{ImageFormat, Luma};
use qrcode::QrCode;
use std::{io::Cursor, path::PathBuf};

const CONTENT_PREFIX: &str = "Ticket/Billet: ";

pub struct QrCodeServiceImpl {
    config: QrCodeServiceConfig,
}

impl QrCodeServiceImpl {
    pub fn new(config: QrCodeServiceConfig) -> Self {
        Self { config }
    }

    pub fn content(ticket_code: &str) -> String {
        format!("{CONTENT_PREFIX}{ticket_code}")
    }

    ///
    /// Ticket codes come from user input, separators must not
    /// move the image out of the directory
    ///
    pub fn file_name(ticket_code: &str) -> String {
        let name = ticket_code.replace(&['/', '\\', '\0'][..], "_");

        format!("{name}.png")
    }

    fn temporary_file_name(file_name: &str) -> String {
        format!(".{file_name}.{:016x}.tmp", rand::random::<u64>())
    }

    fn encode_png(content: &str, min_dimension: u32) -> Result<Vec<u8>, Error> {
        let code = QrCode::new(content.as_bytes())?;
        let image = code
            .render::<Luma<u8>>()
            .min_dimensions(min_dimension, min_dimension)
            .build();

        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, ImageFormat::Png)?;

        Ok(buffer.into_inner())
    }
}

#[async_trait]
impl QrCodeService for QrCodeServiceImpl {
    async fn render(&self, ticket_code: &str) -> Result<PathBuf, Error> {
        let content = Self::content(ticket_code);
        let min_dimension = self.config.min_dimension;

        tracing::debug!("encoding qr code");
        let png = tokio::task::spawn_blocking(move || Self::encode_png(&content, min_dimension))
            .await
            .map_err(anyhow::Error::from)??;

        let file_name = Self::file_name(ticket_code);
        let path = self.config.directory.join(&file_name);
        let temporary_path = self
            .config
            .directory
            .join(Self::temporary_file_name(&file_name));

        tracing::info!(path = %path.display(), "saving qr code");
        tokio::fs::write(&temporary_path, png).await?;
        if let Err(err) = tokio::fs::rename(&temporary_path, &path).await {
            let _ = tokio::fs::remove_file(&temporary_path).await;
            return Err(err.into());
        }

        Ok(path)
    }
}
