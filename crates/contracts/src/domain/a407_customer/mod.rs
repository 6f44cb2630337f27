pub mod aggregate;
mod metadata;

pub use aggregate::{Cliente, ClienteRequest};
pub use metadata::{ENTITY_METADATA, FIELDS, TIPOS_IDENTIFICACION};
