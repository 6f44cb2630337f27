use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::common::AggregateRoot;
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use crate::shared::search::Searchable;

/// Método de valoración del inventario (promedio, FIFO...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetodoValuacion {
    pub id: i64,
    pub nombre: String,
    pub descripcion: String,
    pub activo: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetodoValuacionRequest {
    pub nombre: String,
    pub descripcion: String,
}

impl Searchable for MetodoValuacion {
    const SEARCH_FIELDS: &'static [&'static str] = &["nombre", "descripcion"];
}

impl AggregateRoot for MetodoValuacion {
    type Request = MetodoValuacionRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> MetodoValuacionRequest {
        MetodoValuacionRequest {
            nombre: self.nombre.clone(),
            descripcion: self.descripcion.clone(),
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
