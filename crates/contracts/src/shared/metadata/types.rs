//! Core metadata types for aggregates
//!
//! All types use 'static lifetimes for zero-cost compile-time constants.

use serde::{Deserialize, Serialize};

use super::field_type::FieldKind;
use super::validation::ValidationRules;
use crate::shared::api_error::ErrorMessages;

const DEFAULT_INVALID_FORM: &str = "Por favor, completa todos los campos correctamente.";

// ============================================================================
// Entity-level metadata
// ============================================================================

/// Metadata for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityMetadataInfo {
    pub entity_index: &'static str,
    pub ui: EntityUiMetadata,
    pub messages: ErrorMessages,
    /// Aviso global cuando el formulario no pasa la validación
    pub invalid_form: &'static str,
}

/// Gramatical gender of the element name, drives "creado"/"creada"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Masculine,
    Feminine,
}

impl Gender {
    fn suffix(&self) -> &'static str {
        match self {
            Self::Masculine => "o",
            Self::Feminine => "a",
        }
    }
}

/// UI metadata for entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityUiMetadata {
    pub element_name: &'static str,
    pub list_name: &'static str,
    pub gender: Gender,
    pub icon: &'static str,
}

impl EntityMetadataInfo {
    pub const fn new(
        entity_index: &'static str,
        element_name: &'static str,
        list_name: &'static str,
        gender: Gender,
        icon: &'static str,
        messages: ErrorMessages,
    ) -> Self {
        Self {
            entity_index,
            ui: EntityUiMetadata {
                element_name,
                list_name,
                gender,
                icon,
            },
            messages,
            invalid_form: DEFAULT_INVALID_FORM,
        }
    }

    pub const fn invalid_form(self, message: &'static str) -> Self {
        Self {
            invalid_form: message,
            ..self
        }
    }

    fn outcome(&self, verb: &str) -> String {
        format!(
            "{} {}{} exitosamente",
            self.ui.element_name,
            verb,
            self.ui.gender.suffix()
        )
    }

    pub fn created_message(&self) -> String {
        self.outcome("cread")
    }

    pub fn updated_message(&self) -> String {
        self.outcome("actualizad")
    }

    pub fn deleted_message(&self) -> String {
        self.outcome("eliminad")
    }

    pub fn load_error_title(&self) -> String {
        format!("Error al cargar {}", self.ui.list_name.to_lowercase())
    }

    /// Título del modal de alta, p. ej. "Nueva empresa"
    pub fn create_title(&self) -> String {
        format!(
            "Nuev{} {}",
            self.ui.gender.suffix(),
            self.ui.element_name.to_lowercase()
        )
    }

    pub fn edit_title(&self) -> String {
        format!("Editar {}", self.ui.element_name.to_lowercase())
    }
}

// ============================================================================
// Field-level metadata
// ============================================================================

/// Metadata for a single form field
/// Copy trait enabled for efficient passing by value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMetadata {
    /// camelCase wire name, same key the request serializes to
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub validation: ValidationRules,
    pub placeholder: Option<&'static str>,
    /// Calculado a partir de otros campos, se muestra sin edición
    pub read_only: bool,
}

impl FieldMetadata {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            validation: ValidationRules::none(),
            placeholder: None,
            read_only: false,
        }
    }

    pub const fn rules(self, validation: ValidationRules) -> Self {
        Self { validation, ..self }
    }

    pub const fn placeholder(self, placeholder: &'static str) -> Self {
        Self {
            placeholder: Some(placeholder),
            ..self
        }
    }

    pub const fn read_only(self) -> Self {
        Self {
            read_only: true,
            ..self
        }
    }

    pub fn is_required(&self) -> bool {
        self.validation.is_required()
    }
}

// ============================================================================
// Form support types
// ============================================================================

/// Option of a reference select
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: i64,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: i64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Cross-field check failure, shown as a warning before any request
#[derive(Debug, Clone, PartialEq)]
pub struct FormWarning {
    pub message: String,
    pub title: Option<&'static str>,
}

impl FormWarning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            title: None,
        }
    }

    pub fn titled(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            title: Some(title),
        }
    }
}

/// How deletion of a row is confirmed
#[derive(Debug, Clone, PartialEq)]
pub enum DeletePrompt {
    /// Standard "¿Eliminar?" dialog naming the item
    Item(String),
    Custom {
        message: String,
        title: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPRESA: EntityMetadataInfo = EntityMetadataInfo::new(
        "a201",
        "Empresa",
        "Empresas",
        Gender::Feminine,
        "building",
        ErrorMessages::new("Empresa no encontrada", "Ya existe una empresa con ese NIT"),
    );

    #[test]
    fn test_outcome_messages() {
        assert_eq!(EMPRESA.created_message(), "Empresa creada exitosamente");
        assert_eq!(EMPRESA.updated_message(), "Empresa actualizada exitosamente");
        assert_eq!(EMPRESA.deleted_message(), "Empresa eliminada exitosamente");
        assert_eq!(EMPRESA.load_error_title(), "Error al cargar empresas");
        assert_eq!(EMPRESA.create_title(), "Nueva empresa");
        assert_eq!(EMPRESA.edit_title(), "Editar empresa");
    }

    #[test]
    fn test_masculine_and_invalid_form() {
        let bodega = EntityMetadataInfo {
            ui: EntityUiMetadata {
                element_name: "Producto",
                list_name: "Productos",
                gender: Gender::Masculine,
                icon: "box",
            },
            ..EMPRESA
        };
        assert_eq!(bodega.created_message(), "Producto creado exitosamente");
        assert_eq!(bodega.invalid_form, DEFAULT_INVALID_FORM);
        assert_eq!(
            bodega.invalid_form("Selecciona algo").invalid_form,
            "Selecciona algo"
        );
    }

    #[test]
    fn test_field_builder() {
        let field = FieldMetadata::new("nit", "NIT", FieldKind::Text)
            .rules(ValidationRules::required().max_len(20))
            .placeholder("1234567890001");
        assert!(field.is_required());
        assert_eq!(field.validation.max_length, Some(20));
        assert_eq!(field.placeholder, Some("1234567890001"));
    }
}
