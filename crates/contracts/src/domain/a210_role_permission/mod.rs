pub mod aggregate;
mod metadata;

pub use aggregate::{enrich, RolProcesoPermiso, RolProcesoPermisoDetalle, RolProcesoPermisoRequest};
pub use metadata::{ENTITY_METADATA, FIELDS};
