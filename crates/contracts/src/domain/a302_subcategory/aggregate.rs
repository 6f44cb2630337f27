use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::common::AggregateRoot;
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use crate::shared::search::Searchable;

/// El nombre del nivel superior viene resuelto por el backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Subcategoria {
    pub id: i64,
    pub nombre: String,
    pub codigo: String,
    pub categoria_id: i64,
    pub categoria_nombre: String,
    pub activo: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoriaRequest {
    pub nombre: String,
    pub codigo: String,
    pub categoria_id: i64,
}

impl Searchable for Subcategoria {
    const SEARCH_FIELDS: &'static [&'static str] = &["nombre", "codigo", "categoriaNombre"];
}

impl AggregateRoot for Subcategoria {
    type Request = SubcategoriaRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> SubcategoriaRequest {
        SubcategoriaRequest {
            nombre: self.nombre.clone(),
            codigo: self.codigo.clone(),
            categoria_id: self.categoria_id,
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

    #[test]
    fn test_parent_name_is_searchable_but_not_sent() {
        let json = r#"{"id":4,"nombre":"Gaseosas","codigo":"GA","categoriaId":1,"categoriaNombre":"Bebidas","activo":true}"#;
        let sub: Subcategoria = serde_json::from_str(json).unwrap();
        assert!(sub.matches_filter("bebidas"));
        let body = serde_json::to_value(sub.to_request()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"nombre": "Gaseosas", "codigo": "GA", "categoriaId": 1})
        );
    }
}
