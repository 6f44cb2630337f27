pub mod list;

pub use list::GrupoList;
