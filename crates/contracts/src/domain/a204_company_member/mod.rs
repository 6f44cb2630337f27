pub mod aggregate;
mod metadata;

pub use aggregate::{enrich, PersonaEmpresa, PersonaEmpresaDetalle, PersonaEmpresaRequest};
pub use metadata::{ENTITY_METADATA, FIELDS};
