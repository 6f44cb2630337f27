pub mod list;

pub use list::CondicionPagoList;
