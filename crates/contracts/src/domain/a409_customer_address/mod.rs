pub mod aggregate;
mod metadata;

pub use aggregate::{enrich, DireccionCliente, DireccionClienteRequest};
pub use metadata::{ENTITY_METADATA, FIELDS, TIPOS_DIRECCION};
