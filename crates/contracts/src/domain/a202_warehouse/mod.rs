pub mod aggregate;
mod metadata;

pub use aggregate::{Bodega, BodegaRequest};
pub use metadata::{ENTITY_METADATA, FIELDS};
