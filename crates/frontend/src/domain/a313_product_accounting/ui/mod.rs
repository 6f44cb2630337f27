pub mod list;

pub use list::ProductoConfiguracionContableList;
