pub mod list;

pub use list::PersonaRolList;
