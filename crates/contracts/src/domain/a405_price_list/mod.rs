pub mod aggregate;
mod metadata;

pub use aggregate::{ListaPrecios, ListaPreciosRequest};
pub use metadata::{ENTITY_METADATA, FIELDS, TIPOS_LISTA};
