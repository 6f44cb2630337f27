pub mod aggregate;
mod metadata;

pub use aggregate::{ProductoTipo, ProductoTipoRequest};
pub use metadata::{ENTITY_METADATA, FIELDS};
