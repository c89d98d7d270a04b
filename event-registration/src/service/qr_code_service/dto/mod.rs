mod qr_code_service_config;

pub use qr_code_service_config::*;
