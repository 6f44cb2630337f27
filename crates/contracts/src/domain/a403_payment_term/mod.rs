pub mod aggregate;
mod metadata;

pub use aggregate::{CondicionPago, CondicionPagoRequest};
pub use metadata::{ENTITY_METADATA, FIELDS};
