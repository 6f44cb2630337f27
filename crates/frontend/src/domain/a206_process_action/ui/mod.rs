pub mod list;

pub use list::AccionProcesoList;
