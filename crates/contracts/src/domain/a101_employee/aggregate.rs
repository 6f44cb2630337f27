use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::common::AggregateRoot;
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use crate::shared::search::Searchable;

/// Empleado registrado en el sistema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Persona {
    pub id: i64,
    pub nombre: String,
    pub cedula: String,
    pub direccion: String,
    pub telefono: String,
    pub email: String,
    pub activo: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaRequest {
    pub nombre: String,
    pub cedula: String,
    pub direccion: String,
    pub telefono: String,
    pub email: String,
}

impl Searchable for Persona {
    const SEARCH_FIELDS: &'static [&'static str] = &["nombre", "cedula", "email", "telefono"];
}

impl AggregateRoot for Persona {
    type Request = PersonaRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> PersonaRequest {
        PersonaRequest {
            nombre: self.nombre.clone(),
            cedula: self.cedula.clone(),
            direccion: self.direccion.clone(),
            telefono: self.telefono.clone(),
            email: self.email.clone(),
        }
    }

    fn display_name(&self) -> String {
        self.nombre.clone()
    }

    fn entity_metadata_info() -> EntityMetadataInfo {
        ENTITY_METADATA
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::validate_form;

    fn ana() -> Persona {
        Persona {
            id: 4,
            nombre: "Ana Torres".into(),
            cedula: "0102030405".into(),
            direccion: "Av. Loja".into(),
            telefono: "0991234567".into(),
            email: "ana@empresa.ec".into(),
            activo: true,
        }
    }

    #[test]
    fn test_edit_form_round_trip() {
        let request = ana().to_request();
        assert_eq!(request.cedula, "0102030405");
        assert!(validate_form(&request, FIELDS).is_empty());
    }

    #[test]
    fn test_form_rules() {
        let request = PersonaRequest {
            nombre: "Al".into(),
            cedula: "123".into(),
            email: "sin-arroba".into(),
            ..ana().to_request()
        };
        let errors = validate_form(&request, FIELDS);
        assert_eq!(errors["nombre"], "Debe tener al menos 3 caracteres");
        assert_eq!(errors["cedula"], "Debe tener al menos 10 caracteres");
        assert_eq!(errors["email"], "Email inválido");
    }

    #[test]
    fn test_search_fields() {
        assert!(ana().matches_filter("0991"));
        assert!(ana().matches_filter("torres"));
        assert!(!ana().matches_filter("loja"));
    }

    #[test]
    fn test_response_without_activo() {
        let json = r#"{"id":1,"nombre":"Luis","cedula":"1","direccion":"x","telefono":"2","email":"l@x.ec"}"#;
        let persona: Persona = serde_json::from_str(json).unwrap();
        assert!(!persona.activo);
    }
}
