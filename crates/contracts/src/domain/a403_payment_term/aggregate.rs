use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::common::AggregateRoot;
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use crate::shared::search::Searchable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CondicionPago {
    pub id: i64,
    pub codigo: String,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub dias_credito: i32,
    pub requiere_garantia: bool,
    pub requiere_aprobacion_credito: bool,
    pub permite_cuotas: bool,
    pub numero_cuotas_maximo: Option<i32>,
    pub es_predeterminado: bool,
    pub activo: bool,
    pub es_contado: bool,
    pub es_credito: bool,
    pub fecha_creacion: Option<String>,
    pub fecha_modificacion: Option<String>,
}

impl CondicionPago {
    /// "Contado" sin días de crédito, "Crédito" en otro caso
    pub fn tipo_label(&self) -> &'static str {
        if self.es_credito || (!self.es_contado && self.dias_credito > 0) {
            "Crédito"
        } else {
            "Contado"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CondicionPagoRequest {
    pub codigo: String,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub dias_credito: i32,
    pub requiere_garantia: bool,
    pub requiere_aprobacion_credito: bool,
    pub permite_cuotas: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numero_cuotas_maximo: Option<i32>,
    pub es_predeterminado: bool,
}

impl Default for CondicionPagoRequest {
    fn default() -> Self {
        Self {
            codigo: String::new(),
            nombre: String::new(),
            descripcion: None,
            dias_credito: 0,
            requiere_garantia: false,
            requiere_aprobacion_credito: false,
            permite_cuotas: false,
            numero_cuotas_maximo: Some(1),
            es_predeterminado: false,
        }
    }
}

impl Searchable for CondicionPago {
    const SEARCH_FIELDS: &'static [&'static str] = &["codigo", "nombre", "descripcion"];
}

impl AggregateRoot for CondicionPago {
    type Request = CondicionPagoRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> CondicionPagoRequest {
        CondicionPagoRequest {
            codigo: self.codigo.clone(),
            nombre: self.nombre.clone(),
            descripcion: self.descripcion.clone(),
            dias_credito: self.dias_credito,
            requiere_garantia: self.requiere_garantia,
            requiere_aprobacion_credito: self.requiere_aprobacion_credito,
            permite_cuotas: self.permite_cuotas,
            numero_cuotas_maximo: self.numero_cuotas_maximo,
            es_predeterminado: self.es_predeterminado,
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
    fn test_tipo_label() {
        let contado = CondicionPago {
            es_contado: true,
            ..CondicionPago::default()
        };
        assert_eq!(contado.tipo_label(), "Contado");
        let credito = CondicionPago {
            dias_credito: 30,
            ..CondicionPago::default()
        };
        assert_eq!(credito.tipo_label(), "Crédito");
    }

    #[test]
    fn test_cuotas_lower_bound() {
        let request = CondicionPagoRequest {
            codigo: "C30".into(),
            nombre: "Crédito 30 días".into(),
            dias_credito: 30,
            numero_cuotas_maximo: Some(0),
            ..CondicionPagoRequest::default()
        };
        let errors = validate_form(&request, FIELDS);
        assert_eq!(
            errors.get("numeroCuotasMaximo").map(String::as_str),
            Some("Debe ser mayor o igual a 1")
        );
        assert_eq!(errors.len(), 1);
    }
}
