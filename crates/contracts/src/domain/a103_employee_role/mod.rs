pub mod aggregate;
mod metadata;

pub use aggregate::{enrich, PersonaRol, PersonaRolDetalle, PersonaRolRequest};
pub use metadata::{ENTITY_METADATA, FIELDS};
