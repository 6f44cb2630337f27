pub mod list;

pub use list::RolProcesoPermisoList;
