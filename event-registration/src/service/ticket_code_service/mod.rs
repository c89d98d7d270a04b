mod ticket_code_service;
mod ticket_code_service_impl;

pub use ticket_code_service::*;
pub use ticket_code_service_impl::*;
