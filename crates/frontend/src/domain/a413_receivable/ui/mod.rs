pub mod list;

pub use list::CuentaPorCobrarList;
