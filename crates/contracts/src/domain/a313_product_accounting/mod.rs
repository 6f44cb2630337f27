pub mod aggregate;
mod metadata;

pub use aggregate::{ProductoConfiguracionContable, ProductoConfiguracionContableRequest};
pub use metadata::{ENTITY_METADATA, FIELDS};
