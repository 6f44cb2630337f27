pub mod aggregate;
mod metadata;

pub use aggregate::{TipoCliente, TipoClienteRequest};
pub use metadata::{ENTITY_METADATA, FIELDS};
