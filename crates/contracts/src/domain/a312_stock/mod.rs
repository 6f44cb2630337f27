pub mod aggregate;
mod metadata;

pub use aggregate::{ProductoExistencias, ProductoExistenciasRequest};
pub use metadata::{ENTITY_METADATA, FIELDS};
