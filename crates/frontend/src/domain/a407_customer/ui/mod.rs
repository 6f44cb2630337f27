pub mod list;

pub use list::ClienteList;
