pub mod list;

pub use list::BodegaResponsableList;
