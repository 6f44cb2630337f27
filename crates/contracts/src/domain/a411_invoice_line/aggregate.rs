use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::common::AggregateRoot;
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use crate::shared::search::Searchable;

/// Importes calculados de una línea de factura
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LineAmounts {
    pub subtotal: f64,
    pub impuesto: f64,
    pub total: f64,
}

/// `cantidad × precio`, menos el descuento porcentual y el fijo, más impuesto
pub fn line_amounts(
    cantidad: f64,
    precio_unitario: f64,
    descuento_porcentaje: f64,
    descuento_monto: f64,
    impuesto_porcentaje: f64,
) -> LineAmounts {
    let base = cantidad * precio_unitario;
    let subtotal = base - base * (descuento_porcentaje / 100.0) - descuento_monto;
    let impuesto = subtotal * (impuesto_porcentaje / 100.0);
    LineAmounts {
        subtotal,
        impuesto,
        total: subtotal + impuesto,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetalleFactura {
    pub id: i64,
    pub factura_id: i64,
    pub factura_numero: Option<String>,
    pub producto_id: i64,
    pub producto_codigo: Option<String>,
    pub producto_nombre: Option<String>,
    pub descripcion: String,
    pub cantidad: f64,
    pub precio_unitario: f64,
    pub descuento_porcentaje: Option<f64>,
    pub descuento_monto: Option<f64>,
    pub impuesto_porcentaje: Option<f64>,
    pub impuesto_monto: Option<f64>,
    pub subtotal: f64,
    pub total: f64,
    pub observaciones: Option<String>,
    pub fecha_creacion: Option<String>,
}

/// Suma de los totales de las líneas de una factura
pub fn invoice_lines_total(lines: &[DetalleFactura]) -> f64 {
    lines.iter().map(|l| l.total).sum()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetalleFacturaRequest {
    pub factura_id: i64,
    pub producto_id: i64,
    pub descripcion: String,
    pub cantidad: f64,
    pub precio_unitario: f64,
    pub descuento_porcentaje: f64,
    pub descuento_monto: f64,
    pub impuesto_porcentaje: f64,
    pub impuesto_monto: f64,
    pub subtotal: f64,
    pub total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
}

impl Default for DetalleFacturaRequest {
    fn default() -> Self {
        Self {
            factura_id: 0,
            producto_id: 0,
            descripcion: String::new(),
            cantidad: 1.0,
            precio_unitario: 0.0,
            descuento_porcentaje: 0.0,
            descuento_monto: 0.0,
            impuesto_porcentaje: 0.0,
            impuesto_monto: 0.0,
            subtotal: 0.0,
            total: 0.0,
            observaciones: None,
        }
    }
}

impl DetalleFacturaRequest {
    pub fn amounts(&self) -> LineAmounts {
        line_amounts(
            self.cantidad,
            self.precio_unitario,
            self.descuento_porcentaje,
            self.descuento_monto,
            self.impuesto_porcentaje,
        )
    }
}

impl Searchable for DetalleFactura {
    const SEARCH_FIELDS: &'static [&'static str] =
        &["productoNombre", "productoCodigo", "facturaNumero"];
}

impl AggregateRoot for DetalleFactura {
    type Request = DetalleFacturaRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> DetalleFacturaRequest {
        DetalleFacturaRequest {
            factura_id: self.factura_id,
            producto_id: self.producto_id,
            descripcion: self.descripcion.clone(),
            cantidad: self.cantidad,
            precio_unitario: self.precio_unitario,
            descuento_porcentaje: self.descuento_porcentaje.unwrap_or_default(),
            descuento_monto: self.descuento_monto.unwrap_or_default(),
            impuesto_porcentaje: self.impuesto_porcentaje.unwrap_or_default(),
            impuesto_monto: self.impuesto_monto.unwrap_or_default(),
            subtotal: self.subtotal,
            total: self.total,
            observaciones: self.observaciones.clone(),
        }
    }

    fn display_name(&self) -> String {
        self.producto_nombre
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| self.descripcion.clone())
    }

    fn entity_metadata_info() -> EntityMetadataInfo {
        ENTITY_METADATA
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn recompute(request: &mut DetalleFacturaRequest) {
        let amounts = request.amounts();
        request.subtotal = amounts.subtotal;
        request.impuesto_monto = amounts.impuesto;
        request.total = amounts.total;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_amounts() {
        // 4 × 25 = 100, 10% = 10, menos 5 fijos = 85, IVA 12% = 10.2
        let amounts = line_amounts(4.0, 25.0, 10.0, 5.0, 12.0);
        assert!((amounts.subtotal - 85.0).abs() < 1e-9);
        assert!((amounts.impuesto - 10.2).abs() < 1e-9);
        assert!((amounts.total - 95.2).abs() < 1e-9);
    }

    #[test]
    fn test_invoice_lines_total_and_names() {
        let lines: Vec<DetalleFactura> = serde_json::from_str(
            r#"[
                {"id": 1, "facturaId": 5, "productoId": 3, "productoNombre": "Arroz",
                 "descripcion": "Arroz 1kg", "cantidad": 2, "precioUnitario": 10,
                 "subtotal": 20, "total": 22.4},
                {"id": 2, "facturaId": 5, "productoId": 4, "productoNombre": null,
                 "descripcion": "Flete", "cantidad": 1, "precioUnitario": 5,
                 "subtotal": 5, "total": 5}
            ]"#,
        )
        .unwrap();
        assert!((invoice_lines_total(&lines) - 27.4).abs() < 1e-9);
        assert_eq!(lines[0].display_name(), "Arroz");
        assert_eq!(lines[1].display_name(), "Flete");
        assert_eq!(invoice_lines_total(&[]), 0.0);
    }

    #[test]
    fn test_recompute_updates_derived_fields() {
        let mut request = DetalleFacturaRequest {
            cantidad: 2.0,
            precio_unitario: 50.0,
            impuesto_porcentaje: 15.0,
            ..DetalleFacturaRequest::default()
        };
        DetalleFactura::recompute(&mut request);
        assert!((request.subtotal - 100.0).abs() < 1e-9);
        assert!((request.impuesto_monto - 15.0).abs() < 1e-9);
        assert!((request.total - 115.0).abs() < 1e-9);
    }
}
