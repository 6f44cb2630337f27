use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::common::AggregateRoot;
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use crate::shared::search::Searchable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CentroCostos {
    pub id: i64,
    pub nombre: String,
    pub descripcion: String,
    pub activo: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CentroCostosRequest {
    pub nombre: String,
    pub descripcion: String,
}

impl Searchable for CentroCostos {
    const SEARCH_FIELDS: &'static [&'static str] = &["nombre", "descripcion"];
}

impl AggregateRoot for CentroCostos {
    type Request = CentroCostosRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> CentroCostosRequest {
        CentroCostosRequest {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::search::filter_list;

    #[test]
    fn test_search_description() {
        let centros = vec![
            CentroCostos {
                id: 1,
                nombre: "Planta".into(),
                descripcion: "Producción principal".into(),
                activo: true,
            },
            CentroCostos {
                id: 2,
                nombre: "Oficina".into(),
                descripcion: "Administración".into(),
                activo: true,
            },
        ];
        let found = filter_list(&centros, "PRODUC");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
        assert_eq!(ENTITY_METADATA.created_message(), "Centro de costos creado exitosamente");
    }
}
