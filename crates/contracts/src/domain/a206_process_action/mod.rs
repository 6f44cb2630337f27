pub mod aggregate;
mod metadata;

pub use aggregate::{enrich, AccionProceso, AccionProcesoDetalle, AccionProcesoRequest};
pub use metadata::{ENTITY_METADATA, FIELDS};
