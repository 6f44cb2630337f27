pub mod list;

pub use list::TipoMovimientoList;
