pub mod aggregate;
mod metadata;

pub use aggregate::{
    enrich, PermisoDirectoPersonal, PermisoDirectoPersonalDetalle, PermisoDirectoPersonalRequest,
};
pub use metadata::{ENTITY_METADATA, FIELDS};
