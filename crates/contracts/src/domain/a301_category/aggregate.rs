use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::common::AggregateRoot;
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use crate::shared::search::Searchable;

/// Primer nivel de la clasificación de productos
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Categoria {
    pub id: i64,
    pub nombre: String,
    pub codigo: String,
    pub activo: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriaRequest {
    pub nombre: String,
    pub codigo: String,
}

impl Searchable for Categoria {
    const SEARCH_FIELDS: &'static [&'static str] = &["nombre", "codigo"];
}

impl AggregateRoot for Categoria {
    type Request = CategoriaRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> CategoriaRequest {
        CategoriaRequest {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::validate_form;

    #[test]
    fn test_short_values_rejected() {
        let request = CategoriaRequest {
            nombre: "Be".into(),
            codigo: "B".into(),
        };
        let errors = validate_form(&request, FIELDS);
        assert_eq!(
            errors.get("nombre").map(String::as_str),
            Some("Debe tener al menos 3 caracteres")
        );
        assert_eq!(
            errors.get("codigo").map(String::as_str),
            Some("Debe tener al menos 2 caracteres")
        );

        let request = CategoriaRequest {
            nombre: "Bebidas".into(),
            codigo: "BE".into(),
        };
        assert!(validate_form(&request, FIELDS).is_empty());
    }
}
