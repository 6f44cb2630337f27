pub mod list;

pub use list::ContactoClienteList;
