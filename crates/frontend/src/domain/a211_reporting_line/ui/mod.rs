pub mod list;

pub use list::ReporteJerarquicoList;
