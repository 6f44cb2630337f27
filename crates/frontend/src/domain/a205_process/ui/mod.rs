pub mod list;

pub use list::ProcesoList;
