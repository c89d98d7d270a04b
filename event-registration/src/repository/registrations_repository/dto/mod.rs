mod new_registration;

pub use new_registration::*;
