use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::common::AggregateRoot;
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use crate::shared::search::Searchable;

/// La respuesta usa `nombreLinea`/`codigoLinea`, la petición `nombre`/`codigo`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineaNegocio {
    pub id: i64,
    pub nombre_linea: String,
    pub codigo_linea: String,
    pub activo: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineaNegocioRequest {
    pub nombre: String,
    pub codigo: String,
}

impl Searchable for LineaNegocio {
    const SEARCH_FIELDS: &'static [&'static str] = &["nombreLinea", "codigoLinea"];
}

impl AggregateRoot for LineaNegocio {
    type Request = LineaNegocioRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> LineaNegocioRequest {
        LineaNegocioRequest {
            nombre: self.nombre_linea.clone(),
            codigo: self.codigo_linea.clone(),
        }
    }

    fn display_name(&self) -> String {
        self.nombre_linea.clone()
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

    #[test]
    fn test_edit_maps_renamed_fields() {
        let json = r#"{"id":2,"nombreLinea":"Consumo masivo","codigoLinea":"CM","activo":true}"#;
        let linea: LineaNegocio = serde_json::from_str(json).unwrap();
        assert_eq!(
            linea.to_request(),
            LineaNegocioRequest {
                nombre: "Consumo masivo".into(),
                codigo: "CM".into()
            }
        );
        assert!(linea.matches_filter("cm"));
    }
}
