pub mod mail_service;
pub mod qr_code_service;
pub mod registrations_service;
pub mod ticket_code_service;
pub mod uploads_service;
