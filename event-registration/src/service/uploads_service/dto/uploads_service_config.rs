use std::path::PathBuf;

pub struct UploadsServiceConfig {
    pub directory: PathBuf,
    pub public_path: String,
}
