use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::common::AggregateRoot;
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use crate::shared::search::Searchable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Grupo {
    pub id: i64,
    pub nombre: String,
    pub codigo: String,
    pub activo: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrupoRequest {
    pub nombre: String,
    pub codigo: String,
}

impl Searchable for Grupo {
    const SEARCH_FIELDS: &'static [&'static str] = &["nombre", "codigo"];
}

impl AggregateRoot for Grupo {
    type Request = GrupoRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> GrupoRequest {
        GrupoRequest {
            nombre: self.nombre.clone(),
            codigo: self.codigo.clone(),
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
