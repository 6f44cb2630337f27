pub mod list;

pub use list::EmpresaList;
