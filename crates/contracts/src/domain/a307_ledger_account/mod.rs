pub mod aggregate;
mod metadata;

pub use aggregate::{CuentaContable, CuentaContableRequest};
pub use metadata::{ENTITY_METADATA, FIELDS};
