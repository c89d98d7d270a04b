#[cfg(test)]
mod registration_find_entity;
mod registration_insert_entity;

#[cfg(test)]
pub use registration_find_entity::*;
pub use registration_insert_entity::*;
