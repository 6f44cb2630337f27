pub mod aggregate;
mod metadata;

pub use aggregate::{LineaNegocio, LineaNegocioRequest};
pub use metadata::{ENTITY_METADATA, FIELDS};
