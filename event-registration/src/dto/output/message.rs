use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}
