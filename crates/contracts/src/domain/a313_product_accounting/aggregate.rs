use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::common::AggregateRoot;
use crate::shared::metadata::{DeletePrompt, EntityMetadataInfo, FieldMetadata};
use crate::shared::search::Searchable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductoConfiguracionContable {
    pub id: i64,
    pub cuenta_contable_id: i64,
    pub cuenta_contable_nombre: String,
    pub centro_costos_id: i64,
    pub centro_costos_nombre: String,
    pub metodo_valuacion_id: i64,
    pub metodo_valuacion_nombre: String,
    pub producto_id: i64,
    pub producto_nombre: String,
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductoConfiguracionContableRequest {
    pub cuenta_contable_id: i64,
    pub centro_costos_id: i64,
    pub metodo_valuacion_id: i64,
    pub producto_id: i64,
    pub activo: bool,
}

impl Default for ProductoConfiguracionContableRequest {
    fn default() -> Self {
        Self {
            cuenta_contable_id: 0,
            centro_costos_id: 0,
            metodo_valuacion_id: 0,
            producto_id: 0,
            activo: true,
        }
    }
}

impl Searchable for ProductoConfiguracionContable {
    const SEARCH_FIELDS: &'static [&'static str] = &[
        "productoNombre",
        "cuentaContableNombre",
        "centroCostosNombre",
        "metodoValuacionNombre",
        "id",
    ];
}

impl AggregateRoot for ProductoConfiguracionContable {
    type Request = ProductoConfiguracionContableRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> ProductoConfiguracionContableRequest {
        ProductoConfiguracionContableRequest {
            cuenta_contable_id: self.cuenta_contable_id,
            centro_costos_id: self.centro_costos_id,
            metodo_valuacion_id: self.metodo_valuacion_id,
            producto_id: self.producto_id,
            activo: self.activo,
        }
    }

    fn display_name(&self) -> String {
        self.producto_nombre.clone()
    }

    fn entity_metadata_info() -> EntityMetadataInfo {
        ENTITY_METADATA
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn delete_prompt(&self) -> DeletePrompt {
        DeletePrompt::Custom {
            message: "¿Está seguro de eliminar esta configuración contable?".to_string(),
            title: "¿Eliminar?",
        }
    }
}
