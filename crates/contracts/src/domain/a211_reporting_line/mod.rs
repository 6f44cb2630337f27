pub mod aggregate;
mod metadata;

pub use aggregate::{enrich, ReporteJerarquico, ReporteJerarquicoRequest};
pub use metadata::{ENTITY_METADATA, FIELDS};
