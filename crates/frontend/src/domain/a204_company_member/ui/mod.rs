pub mod list;

pub use list::PersonaEmpresaList;
