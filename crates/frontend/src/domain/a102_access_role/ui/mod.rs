pub mod list;

pub use list::RolAccesoList;
