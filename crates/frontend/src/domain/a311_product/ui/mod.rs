pub mod list;

pub use list::ProductoList;
