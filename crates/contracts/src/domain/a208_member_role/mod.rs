pub mod aggregate;
mod metadata;

pub use aggregate::{enrich, PersonaEmpresaRol, PersonaEmpresaRolDetalle, PersonaEmpresaRolRequest};
pub use metadata::{ENTITY_METADATA, FIELDS};
