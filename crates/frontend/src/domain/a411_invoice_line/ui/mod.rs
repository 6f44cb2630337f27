pub mod list;

pub use list::DetalleFacturaList;
