pub mod list;

pub use list::FormaPagoList;
