pub mod aggregate;
mod metadata;

pub use aggregate::{ProductoLote, ProductoLoteRequest, LOT_DATES_MESSAGE, LOT_DATES_TITLE};
pub use metadata::{ENTITY_METADATA, FIELDS};
