pub mod list;

pub use list::SubgrupoList;
