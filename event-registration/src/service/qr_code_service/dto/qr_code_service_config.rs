use std::path::PathBuf;

pub struct QrCodeServiceConfig {
    pub directory: PathBuf,

    /// Minimal width and height of the rendered image in pixels
    pub min_dimension: u32,
}

impl QrCodeServiceConfig {
    pub const DEFAULT_MIN_DIMENSION: u32 = 300;
}
