mod dto;
mod uploads_service;
mod uploads_service_impl;

pub use dto::{StoredFile, UploadsServiceConfig};
pub use uploads_service::*;
pub use uploads_service_impl::*;
