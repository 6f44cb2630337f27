pub mod aggregate;
mod metadata;

pub use aggregate::{Categoria, CategoriaRequest};
pub use metadata::{ENTITY_METADATA, FIELDS};
