use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationCreated {
    pub message: String,
    pub ticket_code: String,
}

impl RegistrationCreated {
    pub const MESSAGE: &'static str =
        "Inscription réussie ! Un email de confirmation avec votre billet vous a été envoyé.";

    pub fn new(ticket_code: String) -> Self {
        Self {
            message: Self::MESSAGE.to_string(),
            ticket_code,
        }
    }
}
