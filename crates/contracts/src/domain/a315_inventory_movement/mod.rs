pub mod aggregate;
pub mod lines;
mod metadata;

pub use aggregate::{MovimientoInventario, MovimientoInventarioRequest};
pub use lines::{
    product_name, MovementAction, MovementLines, MovementState, EMPTY_LINES_MESSAGE,
    PRODUCT_NOT_FOUND,
};
pub use metadata::{ENTITY_METADATA, ESTADOS, FIELDS};
