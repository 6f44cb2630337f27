pub mod list;

pub use list::MetodoValuacionList;
