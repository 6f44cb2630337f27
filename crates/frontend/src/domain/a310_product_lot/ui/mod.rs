pub mod list;

pub use list::ProductoLoteList;
