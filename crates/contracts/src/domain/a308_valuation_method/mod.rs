pub mod aggregate;
mod metadata;

pub use aggregate::{MetodoValuacion, MetodoValuacionRequest};
pub use metadata::{ENTITY_METADATA, FIELDS};
