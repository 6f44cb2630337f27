pub mod aggregate;
mod metadata;

pub use aggregate::{
    enrich, BodegaResponsable, BodegaResponsableDetalle, BodegaResponsableRequest,
};
pub use metadata::{ENTITY_METADATA, FIELDS};
