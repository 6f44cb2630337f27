use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::common::AggregateRoot;
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use crate::shared::search::Searchable;

/// Proceso de negocio sobre el que se conceden permisos
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Proceso {
    pub id: i64,
    pub codigo: String,
    pub nombre: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcesoRequest {
    pub codigo: String,
    pub nombre: String,
}

impl Proceso {
    pub fn label(&self) -> String {
        format!("{} - {}", self.codigo, self.nombre)
    }
}

impl Searchable for Proceso {
    const SEARCH_FIELDS: &'static [&'static str] = &["codigo", "nombre"];
}

impl AggregateRoot for Proceso {
    type Request = ProcesoRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> ProcesoRequest {
        ProcesoRequest {
            codigo: self.codigo.clone(),
            nombre: self.nombre.clone(),
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
    fn test_to_request_and_label() {
        let proceso = Proceso {
            id: 4,
            codigo: "VEN".into(),
            nombre: "Ventas".into(),
        };
        assert_eq!(
            proceso.to_request(),
            ProcesoRequest {
                codigo: "VEN".into(),
                nombre: "Ventas".into()
            }
        );
        assert_eq!(proceso.label(), "VEN - Ventas");
        assert_eq!(ENTITY_METADATA.created_message(), "Proceso creado exitosamente");
    }
}
