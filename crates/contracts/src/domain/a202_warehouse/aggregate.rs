use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::common::AggregateRoot;
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use crate::shared::search::Searchable;

/// Bodega; el backend ya devuelve el nombre de la empresa
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bodega {
    pub id: i64,
    pub codigo: String,
    pub nombre: String,
    pub direccion: String,
    pub empresa_id: i64,
    pub empresa_nombre: String,
    pub unidad_organizacional_id: Option<i64>,
    pub unidad_organizacional_nombre: Option<String>,
    pub activo: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodegaRequest {
    pub codigo: String,
    pub nombre: String,
    pub direccion: String,
    pub empresa_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unidad_organizacional_id: Option<i64>,
}

impl Searchable for Bodega {
    const SEARCH_FIELDS: &'static [&'static str] = &["nombre", "codigo", "empresaNombre"];
}

impl AggregateRoot for Bodega {
    type Request = BodegaRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> BodegaRequest {
        BodegaRequest {
            codigo: self.codigo.clone(),
            nombre: self.nombre.clone(),
            direccion: self.direccion.clone(),
            empresa_id: self.empresa_id,
            unidad_organizacional_id: self.unidad_organizacional_id,
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
    use crate::shared::metadata::apply_input;

    #[test]
    fn test_optional_unit_is_omitted() {
        let request = BodegaRequest {
            codigo: "B01".into(),
            nombre: "Central".into(),
            direccion: "Quito".into(),
            empresa_id: 2,
            unidad_organizacional_id: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("unidadOrganizacionalId").is_none());

        let request = apply_input(&request, &FIELDS[4], "5").unwrap();
        assert_eq!(request.unidad_organizacional_id, Some(5));
    }

    #[test]
    fn test_search_by_company_name() {
        let bodega = Bodega {
            id: 1,
            nombre: "Central".into(),
            codigo: "B01".into(),
            empresa_nombre: "Acme".into(),
            ..Bodega::default()
        };
        assert!(bodega.matches_filter("acm"));
        assert!(bodega.matches_filter("b0"));
    }
}
