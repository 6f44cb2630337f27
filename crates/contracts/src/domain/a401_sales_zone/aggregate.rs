use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::common::AggregateRoot;
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use crate::shared::search::Searchable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ZonaVenta {
    pub id: i64,
    pub codigo: String,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub activo: bool,
    pub fecha_creacion: Option<String>,
    pub fecha_modificacion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZonaVentaRequest {
    pub codigo: String,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub activo: bool,
}

impl Default for ZonaVentaRequest {
    fn default() -> Self {
        Self {
            codigo: String::new(),
            nombre: String::new(),
            descripcion: None,
            activo: true,
        }
    }
}

impl Searchable for ZonaVenta {
    const SEARCH_FIELDS: &'static [&'static str] = &["codigo", "nombre", "descripcion"];
}

impl AggregateRoot for ZonaVenta {
    type Request = ZonaVentaRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> ZonaVentaRequest {
        ZonaVentaRequest {
            codigo: self.codigo.clone(),
            nombre: self.nombre.clone(),
            descripcion: self.descripcion.clone(),
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
    fn test_codigo_max_length() {
        let request = ZonaVentaRequest {
            codigo: "Z".repeat(21),
            nombre: "Sierra".into(),
            ..ZonaVentaRequest::default()
        };
        let errors = validate_form(&request, FIELDS);
        assert_eq!(
            errors.get("codigo").map(String::as_str),
            Some("Debe tener máximo 20 caracteres")
        );
        assert!(!errors.contains_key("descripcion"));
    }

    #[test]
    fn test_new_zone_is_active_and_skips_empty_description() {
        let json = serde_json::to_value(ZonaVentaRequest::default()).unwrap();
        assert_eq!(json["activo"], true);
        assert!(json.get("descripcion").is_none());
    }
}
