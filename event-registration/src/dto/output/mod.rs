mod message;
mod registration_created;

pub use message::*;
pub use registration_created::*;
