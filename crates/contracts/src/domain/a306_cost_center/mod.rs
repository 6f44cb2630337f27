pub mod aggregate;
mod metadata;

pub use aggregate::{CentroCostos, CentroCostosRequest};
pub use metadata::{ENTITY_METADATA, FIELDS};
