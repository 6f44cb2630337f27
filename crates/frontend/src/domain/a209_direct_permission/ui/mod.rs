pub mod list;

pub use list::PermisoDirectoList;
