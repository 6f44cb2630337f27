pub mod aggregate;
mod metadata;

pub use aggregate::{ZonaVenta, ZonaVentaRequest};
pub use metadata::{ENTITY_METADATA, FIELDS};
