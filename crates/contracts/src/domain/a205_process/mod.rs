pub mod aggregate;
mod metadata;

pub use aggregate::{Proceso, ProcesoRequest};
pub use metadata::{ENTITY_METADATA, FIELDS};
