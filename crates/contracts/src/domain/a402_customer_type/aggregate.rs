use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::common::AggregateRoot;
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use crate::shared::search::Searchable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TipoCliente {
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
pub struct TipoClienteRequest {
    pub codigo: String,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub activo: bool,
}

impl Default for TipoClienteRequest {
    fn default() -> Self {
        Self {
            codigo: String::new(),
            nombre: String::new(),
            descripcion: None,
            activo: true,
        }
    }
}

impl Searchable for TipoCliente {
    const SEARCH_FIELDS: &'static [&'static str] = &["codigo", "nombre", "descripcion"];
}

impl AggregateRoot for TipoCliente {
    type Request = TipoClienteRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> TipoClienteRequest {
        TipoClienteRequest {
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
