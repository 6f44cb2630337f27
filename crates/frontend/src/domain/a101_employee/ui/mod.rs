pub mod list;

pub use list::PersonaList;
