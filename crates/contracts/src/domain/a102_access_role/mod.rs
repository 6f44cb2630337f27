pub mod aggregate;
mod metadata;

pub use aggregate::{RolAcceso, RolAccesoRequest};
pub use metadata::{ENTITY_METADATA, FIELDS};
