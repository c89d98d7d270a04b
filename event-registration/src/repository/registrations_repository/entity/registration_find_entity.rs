use bson::{oid::ObjectId, DateTime};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegistrationFindEntity {
    pub _id: ObjectId,

    pub full_name: String,
    pub email: String,
    pub event_type: String,
    pub phone: String,
    pub file: Option<String>,

    pub ticket_code: String,

    pub created_at: DateTime,
}
