pub mod list;

pub use list::CobroList;
