pub mod list;

pub use list::TipoClienteList;
