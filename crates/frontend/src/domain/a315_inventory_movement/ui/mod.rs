pub mod lines;
pub mod list;

pub use list::MovimientoInventarioList;
