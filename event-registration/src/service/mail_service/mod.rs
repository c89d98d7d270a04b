mod dto;
mod error;
mod mail_service;
mod smtp_mail_service;

pub use dto::{ConfirmationMail, MailServiceConfig};
pub use error::*;
pub use mail_service::*;
pub use smtp_mail_service::*;
