pub mod list;

pub use list::PrecioProductoList;
