use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::common::AggregateRoot;
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use crate::shared::search::Searchable;

/// Rol de acceso a la aplicación
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RolAcceso {
    pub id: i64,
    pub nombre: String,
    pub activo: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolAccesoRequest {
    pub nombre: String,
}

impl Searchable for RolAcceso {
    const SEARCH_FIELDS: &'static [&'static str] = &["nombre", "id"];
}

impl AggregateRoot for RolAcceso {
    type Request = RolAccesoRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> RolAccesoRequest {
        RolAccesoRequest {
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
    fn test_search_by_id() {
        let rol = RolAcceso {
            id: 17,
            nombre: "Contador".into(),
            activo: true,
        };
        assert!(rol.matches_filter("17"));
        assert!(rol.matches_filter("CONTA"));
        assert!(!rol.matches_filter("admin"));
    }
}
