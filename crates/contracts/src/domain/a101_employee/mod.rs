pub mod aggregate;
mod metadata;

pub use aggregate::{Persona, PersonaRequest};
pub use metadata::{ENTITY_METADATA, FIELDS};
