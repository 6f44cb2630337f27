pub mod list;

pub use list::FacturaList;
