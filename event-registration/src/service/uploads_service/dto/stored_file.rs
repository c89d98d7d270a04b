use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Location on disk
    pub path: PathBuf,

    /// Location under which the file is served
    pub uri: String,
}
