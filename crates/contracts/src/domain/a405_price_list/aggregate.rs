use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS, TIPOS_LISTA};
use crate::domain::common::{check_date_range, date_input, AggregateRoot};
use crate::shared::metadata::{EntityMetadataInfo, FieldKind, FieldMetadata, FormWarning};
use crate::shared::search::Searchable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListaPrecios {
    pub id: i64,
    pub codigo: String,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub tipo_lista: String,
    pub moneda_id: i64,
    pub fecha_vigencia_desde: String,
    pub fecha_vigencia_hasta: Option<String>,
    pub activo: bool,
    pub fecha_creacion: Option<String>,
    pub fecha_modificacion: Option<String>,
    pub esta_vigente: bool,
    pub cantidad_precios: i64,
}

impl ListaPrecios {
    pub fn tipo_lista_label(&self) -> &str {
        FieldKind::Choice(TIPOS_LISTA)
            .choice_label(&self.tipo_lista)
            .unwrap_or(self.tipo_lista.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListaPreciosRequest {
    pub codigo: String,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub tipo_lista: String,
    pub moneda_id: i64,
    pub fecha_vigencia_desde: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_vigencia_hasta: Option<String>,
    pub activo: bool,
}

impl Default for ListaPreciosRequest {
    fn default() -> Self {
        Self {
            codigo: String::new(),
            nombre: String::new(),
            descripcion: None,
            tipo_lista: "PUBLICO".to_string(),
            moneda_id: 1,
            fecha_vigencia_desde: String::new(),
            fecha_vigencia_hasta: None,
            activo: true,
        }
    }
}

impl Searchable for ListaPrecios {
    const SEARCH_FIELDS: &'static [&'static str] = &["codigo", "nombre", "tipoLista", "descripcion"];
}

impl AggregateRoot for ListaPrecios {
    type Request = ListaPreciosRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> ListaPreciosRequest {
        ListaPreciosRequest {
            codigo: self.codigo.clone(),
            nombre: self.nombre.clone(),
            descripcion: self.descripcion.clone(),
            tipo_lista: self.tipo_lista.clone(),
            moneda_id: self.moneda_id,
            fecha_vigencia_desde: date_input(&self.fecha_vigencia_desde),
            fecha_vigencia_hasta: self.fecha_vigencia_hasta.as_deref().map(date_input),
            activo: self.activo,
        }
    }

    fn display_name(&self) -> String {
        format!("{} - {}", self.codigo, self.nombre)
    }

    fn entity_metadata_info() -> EntityMetadataInfo {
        ENTITY_METADATA
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn check(request: &ListaPreciosRequest) -> Result<(), FormWarning> {
        check_date_range(
            &request.fecha_vigencia_desde,
            request.fecha_vigencia_hasta.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_labels() {
        let request = ListaPreciosRequest::default();
        assert_eq!(request.tipo_lista, "PUBLICO");
        assert_eq!(request.moneda_id, 1);

        let lista = ListaPrecios {
            tipo_lista: "MAYORISTA".into(),
            ..ListaPrecios::default()
        };
        assert_eq!(lista.tipo_lista_label(), "Mayorista");
        let rara = ListaPrecios {
            tipo_lista: "OTRO".into(),
            ..ListaPrecios::default()
        };
        assert_eq!(rara.tipo_lista_label(), "OTRO");
    }

    #[test]
    fn test_vigencia_range() {
        let request = ListaPreciosRequest {
            fecha_vigencia_desde: "2024-06-01".into(),
            fecha_vigencia_hasta: Some("2024-01-01".into()),
            ..ListaPreciosRequest::default()
        };
        assert!(ListaPrecios::check(&request).is_err());
    }
}
