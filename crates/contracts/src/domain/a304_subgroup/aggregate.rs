use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::common::AggregateRoot;
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use crate::shared::search::Searchable;

/// El nombre del nivel superior viene resuelto por el backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Subgrupo {
    pub id: i64,
    pub nombre: String,
    pub codigo: String,
    pub grupo_id: i64,
    pub grupo_nombre: String,
    pub activo: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubgrupoRequest {
    pub nombre: String,
    pub codigo: String,
    pub grupo_id: i64,
}

impl Searchable for Subgrupo {
    const SEARCH_FIELDS: &'static [&'static str] = &["nombre", "codigo", "grupoNombre"];
}

impl AggregateRoot for Subgrupo {
    type Request = SubgrupoRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> SubgrupoRequest {
        SubgrupoRequest {
            nombre: self.nombre.clone(),
            codigo: self.codigo.clone(),
            grupo_id: self.grupo_id,
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
