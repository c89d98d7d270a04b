use bson::DateTime;
use serde::Serialize;

#[derive(Serialize)]
pub struct RegistrationInsertEntity<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub event_type: &'a str,
    pub phone: &'a str,
    pub file: Option<&'a str>,

    pub ticket_code: &'a str,

    pub created_at: DateTime,
}
