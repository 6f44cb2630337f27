pub mod list;

pub use list::ProductoTipoList;
