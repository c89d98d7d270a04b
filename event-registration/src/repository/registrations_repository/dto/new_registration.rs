use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRegistration {
    pub full_name: String,
    pub email: String,
    pub event_type: String,
    pub phone: String,

    /// Public URI of the uploaded file
    pub file: Option<String>,

    pub ticket_code: String,

    pub created_at: OffsetDateTime,
}
