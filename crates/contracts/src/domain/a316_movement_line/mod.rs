pub mod aggregate;
mod metadata;

pub use aggregate::{DetalleMovimiento, DetalleMovimientoRequest};
pub use metadata::{ENTITY_METADATA, FIELDS};
