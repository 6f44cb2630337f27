pub mod list;

pub use list::ZonaVentaList;
