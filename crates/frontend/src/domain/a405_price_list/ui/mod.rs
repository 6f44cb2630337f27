pub mod list;

pub use list::ListaPreciosList;
