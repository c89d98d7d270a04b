mod confirmation_mail;
mod mail_service_config;

pub use confirmation_mail::*;
pub use mail_service_config::*;
