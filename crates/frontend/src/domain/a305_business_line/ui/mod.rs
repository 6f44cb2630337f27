pub mod list;

pub use list::LineaNegocioList;
