pub mod aggregate;
mod metadata;

pub use aggregate::{Subgrupo, SubgrupoRequest};
pub use metadata::{ENTITY_METADATA, FIELDS};
