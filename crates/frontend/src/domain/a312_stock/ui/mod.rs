pub mod list;

pub use list::ProductoExistenciasList;
