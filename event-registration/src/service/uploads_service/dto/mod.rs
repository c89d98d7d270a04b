mod stored_file;
mod uploads_service_config;

pub use stored_file::*;
pub use uploads_service_config::*;
