//! Pantallas CRUD genéricas.
//!
//! Una pantalla se compone de un [`CrudSource`] (cómo se cargan y guardan
//! las filas), un [`PageController`] (estado en señales) y un [`CrudPage`]
//! (tabla + modal).

pub mod controller;
pub mod form;
pub mod page;
pub mod source;

pub use controller::{CrudController, PageController};
pub use form::{form_field, form_fields};
pub use page::{badge, lookup_box, ref_filter, row_button, scope_select, Column, CrudPage};
pub use source::{
    list_by, options, scoped_list, CrudSource, FormOptions, Loaded, RequestOf, RestSource, ScopedSource,
};
