pub mod list;

pub use list::UnidadOrganizacionalList;
