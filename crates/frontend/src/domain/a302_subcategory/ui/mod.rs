pub mod list;

pub use list::SubcategoriaList;
