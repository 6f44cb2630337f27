pub mod aggregate;
mod metadata;

pub use aggregate::{Grupo, GrupoRequest};
pub use metadata::{ENTITY_METADATA, FIELDS};
