use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::common::AggregateRoot;
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use crate::shared::search::Searchable;

/// Línea de un movimiento de inventario tal como la devuelve el backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetalleMovimiento {
    pub id: i64,
    pub producto_id: i64,
    pub producto_nombre: String,
    pub lote_id: Option<i64>,
    pub lote_numero: Option<String>,
    pub cantidad: f64,
    pub costo_unitario: f64,
    pub costo_total: f64,
    pub ubicacion_fisica: Option<String>,
    pub observaciones: Option<String>,
}

/// Línea enviada dentro de `detalles` al crear o actualizar un movimiento
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetalleMovimientoRequest {
    pub producto_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lote_id: Option<i64>,
    pub cantidad: f64,
    pub costo_unitario: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ubicacion_fisica: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
}

impl Default for DetalleMovimientoRequest {
    /// Línea nueva: una unidad a costo cero
    fn default() -> Self {
        Self {
            producto_id: 0,
            lote_id: None,
            cantidad: 1.0,
            costo_unitario: 0.0,
            ubicacion_fisica: None,
            observaciones: None,
        }
    }
}

impl DetalleMovimientoRequest {
    pub fn line_total(&self) -> f64 {
        self.cantidad * self.costo_unitario
    }
}

impl Searchable for DetalleMovimiento {
    const SEARCH_FIELDS: &'static [&'static str] = &["productoNombre", "loteNumero", "id"];
}

impl AggregateRoot for DetalleMovimiento {
    type Request = DetalleMovimientoRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> DetalleMovimientoRequest {
        DetalleMovimientoRequest {
            producto_id: self.producto_id,
            lote_id: self.lote_id,
            cantidad: self.cantidad,
            costo_unitario: self.costo_unitario,
            ubicacion_fisica: self.ubicacion_fisica.clone(),
            observaciones: self.observaciones.clone(),
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::validate_form;

    #[test]
    fn test_blank_line() {
        let line = DetalleMovimientoRequest::default();
        assert_eq!(line.cantidad, 1.0);
        assert_eq!(line.line_total(), 0.0);
        // falta el producto
        let errors = validate_form(&line, FIELDS);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("productoId"));
    }

    #[test]
    fn test_wire_line_to_request() {
        let json = r#"{"id":9,"productoId":3,"productoNombre":"Arroz","loteId":null,
            "cantidad":10,"costoUnitario":2.5,"costoTotal":25,"ubicacionFisica":"A-1"}"#;
        let linea: DetalleMovimiento = serde_json::from_str(json).unwrap();
        let request = linea.to_request();
        assert_eq!(request.line_total(), 25.0);
        assert_eq!(request.ubicacion_fisica.as_deref(), Some("A-1"));
        assert_eq!(request.observaciones, None);
    }
}
