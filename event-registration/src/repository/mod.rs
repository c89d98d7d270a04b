mod error;
mod registrations_repository;

pub use error::*;
pub use registrations_repository::*;
