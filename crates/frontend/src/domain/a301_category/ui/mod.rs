pub mod list;

pub use list::CategoriaList;
