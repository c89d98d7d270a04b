mod registrations_service;
mod registrations_service_impl;

pub use registrations_service::*;
pub use registrations_service_impl::*;
