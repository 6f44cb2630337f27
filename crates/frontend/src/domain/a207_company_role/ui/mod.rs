pub mod list;

pub use list::RolEmpresaList;
