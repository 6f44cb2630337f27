use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::common::AggregateRoot;
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use crate::shared::search::Searchable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Empresa {
    pub id: i64,
    pub nit: String,
    pub nombre: String,
    pub direccion: String,
    pub telefono: String,
    pub email: String,
    pub activo: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmpresaRequest {
    pub nit: String,
    pub nombre: String,
    pub direccion: String,
    pub telefono: String,
    pub email: String,
}

impl Searchable for Empresa {
    const SEARCH_FIELDS: &'static [&'static str] = &["nombre", "nit", "email"];
}

impl AggregateRoot for Empresa {
    type Request = EmpresaRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> EmpresaRequest {
        EmpresaRequest {
            nit: self.nit.clone(),
            nombre: self.nombre.clone(),
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
    use serde_json::json;

    fn acme() -> EmpresaRequest {
        EmpresaRequest {
            nit: "1234567890001".into(),
            nombre: "Acme".into(),
            direccion: "Av. X".into(),
            telefono: "0999999999".into(),
            email: "a@acme.com".into(),
        }
    }

    #[test]
    fn test_acme_is_valid() {
        assert!(validate_form(&acme(), FIELDS).is_empty());
    }

    #[test]
    fn test_request_wire_format() {
        assert_eq!(
            serde_json::to_value(acme()).unwrap(),
            json!({
                "nit": "1234567890001",
                "nombre": "Acme",
                "direccion": "Av. X",
                "telefono": "0999999999",
                "email": "a@acme.com"
            })
        );
    }

    #[test]
    fn test_nit_too_long() {
        let request = EmpresaRequest {
            nit: "1".repeat(21),
            ..acme()
        };
        assert_eq!(
            validate_form(&request, FIELDS)["nit"],
            "Debe tener máximo 20 caracteres"
        );
    }
}
