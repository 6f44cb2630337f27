use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::common::AggregateRoot;
use crate::shared::metadata::{DeletePrompt, EntityMetadataInfo, FieldMetadata};
use crate::shared::search::Searchable;

/// Existencias de un producto en una bodega, opcionalmente por lote
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductoExistencias {
    pub id: i64,
    pub producto_id: i64,
    pub producto_nombre: String,
    pub bodega_id: i64,
    pub bodega_nombre: String,
    pub producto_lote_id: Option<i64>,
    pub lote_numero: Option<String>,
    pub cantidad_fisica: f64,
    pub cantidad_disponible: f64,
    pub cantidad_reservada: f64,
    pub costo_promedio: f64,
    pub ubicacion: Option<String>,
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductoExistenciasRequest {
    pub producto_id: i64,
    pub bodega_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producto_lote_id: Option<i64>,
    pub cantidad_fisica: f64,
    pub cantidad_disponible: f64,
    pub cantidad_reservada: f64,
    pub costo_promedio: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ubicacion: Option<String>,
    pub activo: bool,
}

impl Default for ProductoExistenciasRequest {
    fn default() -> Self {
        Self {
            producto_id: 0,
            bodega_id: 0,
            producto_lote_id: None,
            cantidad_fisica: 0.0,
            cantidad_disponible: 0.0,
            cantidad_reservada: 0.0,
            costo_promedio: 0.0,
            ubicacion: None,
            activo: true,
        }
    }
}

impl ProductoExistencias {
    /// Valor del inventario físico a costo promedio
    pub fn valor_total(&self) -> f64 {
        self.cantidad_fisica * self.costo_promedio
    }
}

impl Searchable for ProductoExistencias {
    const SEARCH_FIELDS: &'static [&'static str] =
        &["productoNombre", "bodegaNombre", "loteNumero", "id"];
}

impl AggregateRoot for ProductoExistencias {
    type Request = ProductoExistenciasRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> ProductoExistenciasRequest {
        ProductoExistenciasRequest {
            producto_id: self.producto_id,
            bodega_id: self.bodega_id,
            producto_lote_id: self.producto_lote_id,
            cantidad_fisica: self.cantidad_fisica,
            cantidad_disponible: self.cantidad_disponible,
            cantidad_reservada: self.cantidad_reservada,
            costo_promedio: self.costo_promedio,
            ubicacion: self.ubicacion.clone(),
            activo: self.activo,
        }
    }

    fn display_name(&self) -> String {
        format!("{} en {}", self.producto_nombre, self.bodega_nombre)
    }

    fn entity_metadata_info() -> EntityMetadataInfo {
        ENTITY_METADATA
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn delete_prompt(&self) -> DeletePrompt {
        DeletePrompt::Custom {
            message: "¿Está seguro de eliminar este registro de existencias?".to_string(),
            title: "¿Eliminar?",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_by_lot_and_id() {
        let json = r#"{
            "id": 31, "productoId": 1, "productoNombre": "Arroz", "bodegaId": 2,
            "bodegaNombre": "Central", "productoLoteId": null, "loteNumero": null,
            "cantidadFisica": 10, "cantidadDisponible": 8, "cantidadReservada": 2,
            "costoPromedio": 1.25, "ubicacion": null, "activo": true
        }"#;
        let existencias: ProductoExistencias = serde_json::from_str(json).unwrap();
        assert!(existencias.matches_filter("31"));
        assert!(existencias.matches_filter("central"));
        assert!(!existencias.matches_filter("lote"));
        assert_eq!(existencias.valor_total(), 12.5);
        assert_eq!(existencias.to_request().ubicacion, None);
    }
}
