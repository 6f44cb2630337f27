pub mod aggregate;
mod metadata;

pub use aggregate::{Subcategoria, SubcategoriaRequest};
pub use metadata::{ENTITY_METADATA, FIELDS};
