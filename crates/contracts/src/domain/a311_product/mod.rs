pub mod aggregate;
mod metadata;

pub use aggregate::{Producto, ProductoRequest};
pub use metadata::{ENTITY_METADATA, FIELDS, TEMPERATURAS};
