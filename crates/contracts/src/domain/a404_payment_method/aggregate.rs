use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::common::AggregateRoot;
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use crate::shared::search::Searchable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormaPago {
    pub id: i64,
    pub codigo: String,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub requiere_referencia: bool,
    pub activo: bool,
    pub fecha_creacion: Option<String>,
    pub fecha_modificacion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormaPagoRequest {
    pub codigo: String,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub requiere_referencia: bool,
    pub activo: bool,
}

impl Default for FormaPagoRequest {
    fn default() -> Self {
        Self {
            codigo: String::new(),
            nombre: String::new(),
            descripcion: None,
            requiere_referencia: false,
            activo: true,
        }
    }
}

impl Searchable for FormaPago {
    const SEARCH_FIELDS: &'static [&'static str] = &["codigo", "nombre", "descripcion"];
}

impl AggregateRoot for FormaPago {
    type Request = FormaPagoRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> FormaPagoRequest {
        FormaPagoRequest {
            codigo: self.codigo.clone(),
            nombre: self.nombre.clone(),
            descripcion: self.descripcion.clone(),
            requiere_referencia: self.requiere_referencia,
            activo: self.activo,
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

    #[test]
    fn test_codigo_is_short() {
        let request = FormaPagoRequest {
            codigo: "TRANSFER-01".into(),
            nombre: "Transferencia".into(),
            ..FormaPagoRequest::default()
        };
        let errors = validate_form(&request, FIELDS);
        assert_eq!(
            errors.get("codigo").map(String::as_str),
            Some("Debe tener máximo 10 caracteres")
        );
    }
}
