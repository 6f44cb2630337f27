pub mod aggregate;
mod metadata;

pub use aggregate::{FormaPago, FormaPagoRequest};
pub use metadata::{ENTITY_METADATA, FIELDS};
