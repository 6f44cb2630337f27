pub mod aggregate;
mod metadata;

pub use aggregate::{enrich, ContactoCliente, ContactoClienteRequest};
pub use metadata::{ENTITY_METADATA, FIELDS};
