pub mod aggregate;
mod metadata;

pub use aggregate::{
    enrich, UnidadOrganizacional, UnidadOrganizacionalDetalle, UnidadOrganizacionalRequest,
};
pub use metadata::{ENTITY_METADATA, FIELDS};
