pub mod aggregate;
mod metadata;

pub use aggregate::{enrich, PrecioProducto, PrecioProductoDetalle, PrecioProductoRequest};
pub use metadata::{ENTITY_METADATA, FIELDS, MIN_PRICE_MESSAGE};
