pub mod aggregate;
mod metadata;

pub use aggregate::{enrich, RolEmpresa, RolEmpresaDetalle, RolEmpresaRequest};
pub use metadata::{ENTITY_METADATA, FIELDS};
