//! Metadata de entidades y campos de formulario
//!
//! Todo es `'static` y se declara como constantes en cada agregado
//! (`ENTITY_METADATA`, `FIELDS`). El frontend genera formularios, columnas y
//! mensajes a partir de estas tablas.
//!
//! ## Uso
//!
//! ```rust,ignore
//! use contracts::domain::a201_company::{ENTITY_METADATA, FIELDS};
//!
//! println!("{}", ENTITY_METADATA.ui.list_name);
//! for field in FIELDS {
//!     if field.validation.required {
//!         println!("Requerido: {}", field.label);
//!     }
//! }
//! ```

mod field_type;
mod form;
mod types;
mod validation;

pub use field_type::FieldKind;
pub use form::{apply_input, field_text, parse_decimal, validate_form, value_text, FormErrors};
pub use types::{
    DeletePrompt, EntityMetadataInfo, EntityUiMetadata, FieldMetadata, FormWarning, Gender,
    SelectOption,
};
pub use validation::{is_valid_email, ValidationRules};
