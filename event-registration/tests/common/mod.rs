use reqwest::multipart::Form;
use std::sync::Once;

static INIT_ENV_ONCE: Once = Once::new();

pub fn init_env() {
    INIT_ENV_ONCE.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

pub fn address() -> String {
    let port = std::env::var("EVENT_REGISTRATION_PORT")
        .ok()
        .filter(|port| !port.is_empty())
        .unwrap_or_else(|| "5000".to_string());

    format!("127.0.0.1:{port}")
}

/// Recipient that receives the confirmation mails sent during tests
pub fn test_recipient() -> String {
    std::env::var("EVENT_REGISTRATION_TEST_RECIPIENT").unwrap()
}

pub fn registration_form() -> Form {
    Form::new()
        .text("fullName", "Amina Diallo")
        .text("email", test_recipient())
        .text("eventType", "Gala VIP")
        .text("phone", "+221771234567")
}
