pub mod aggregate;
mod metadata;

pub use aggregate::{TipoMovimiento, TipoMovimientoRequest};
pub use metadata::{AFECTA_INVENTARIO, ENTITY_METADATA, FIELDS};
