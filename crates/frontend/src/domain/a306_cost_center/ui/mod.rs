pub mod list;

pub use list::CentroCostosList;
