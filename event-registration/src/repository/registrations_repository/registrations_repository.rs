use super::NewRegistration;
use crate::repository;
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationsRepository: Send + Sync {
    ///
    /// Inserts new registration.
    ///
    /// Ticket codes are not unique, inserting the same code twice succeeds.
    ///
    async fn insert(&self, registration: &NewRegistration) -> Result<ObjectId, repository::Error>;
}
