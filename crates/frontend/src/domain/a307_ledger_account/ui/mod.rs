pub mod list;

pub use list::CuentaContableList;
