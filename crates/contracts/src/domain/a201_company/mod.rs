pub mod aggregate;
mod metadata;

pub use aggregate::{Empresa, EmpresaRequest};
pub use metadata::{ENTITY_METADATA, FIELDS};
