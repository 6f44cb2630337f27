use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use super::state::{InvoiceAction, InvoiceState};
use crate::domain::common::{check_date_range, date_input, AggregateRoot};
use crate::shared::metadata::{DeletePrompt, EntityMetadataInfo, FieldMetadata, FormWarning};
use crate::shared::search::Searchable;

pub const DUE_DATE_MESSAGE: &str =
    "La fecha de vencimiento no puede ser anterior a la fecha de emisión";

/// Total de cabecera: `subtotal - descuento + impuesto`
pub fn invoice_total(subtotal: f64, descuento: f64, impuesto: f64) -> f64 {
    subtotal - descuento + impuesto
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Factura {
    pub id: i64,
    pub numero_factura: String,
    pub orden_venta_id: i64,
    pub orden_venta_numero: Option<String>,
    pub despacho_id: Option<i64>,
    pub despacho_numero: Option<String>,
    pub cliente_id: i64,
    pub cliente_nombre: Option<String>,
    pub direccion_facturacion_id: Option<i64>,
    pub direccion_facturacion: Option<String>,
    pub fecha_emision: String,
    pub fecha_vencimiento: String,
    pub forma_pago_id: i64,
    pub forma_pago_nombre: Option<String>,
    pub referencia_pago: Option<String>,
    pub subtotal: f64,
    pub descuento_monto: f64,
    pub impuesto_monto: f64,
    pub total: f64,
    pub saldo_pendiente: Option<f64>,
    pub estado: InvoiceState,
    pub observaciones: Option<String>,
    pub autorizado_sri: bool,
    pub numero_autorizacion: Option<String>,
    pub clave_acceso: Option<String>,
    pub email_destinatario: Option<String>,
    pub fecha_creacion: Option<String>,
    pub fecha_modificacion: Option<String>,
}

impl Factura {
    /// Saldo pendiente; sin dato del backend se asume el total
    pub fn saldo(&self) -> f64 {
        self.saldo_pendiente.unwrap_or(self.total)
    }

    /// Operaciones que la lista ofrece para la factura
    pub fn actions(&self) -> Vec<InvoiceAction> {
        let mut actions = Vec::new();
        if matches!(self.estado, InvoiceState::Pendiente | InvoiceState::Vencida)
            && self.saldo() > 0.0
        {
            actions.push(InvoiceAction::RegistrarPago);
        }
        if self.estado != InvoiceState::Anulada && !self.autorizado_sri {
            actions.push(InvoiceAction::AutorizarSri);
        }
        if self.estado != InvoiceState::Anulada {
            actions.push(InvoiceAction::Anular);
        }
        actions
    }

    pub fn void_prompt(&self) -> String {
        format!("¿Está seguro de anular la factura \"{}\"?", self.numero_factura)
    }
}

/// Filtro por estado; `None` equivale a "TODOS"
pub fn filter_by_state(facturas: &[Factura], estado: Option<InvoiceState>) -> Vec<Factura> {
    facturas
        .iter()
        .filter(|f| estado.map_or(true, |e| f.estado == e))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacturaRequest {
    pub numero_factura: String,
    pub orden_venta_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub despacho_id: Option<i64>,
    pub cliente_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direccion_facturacion_id: Option<i64>,
    pub fecha_emision: String,
    pub fecha_vencimiento: String,
    pub forma_pago_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referencia_pago: Option<String>,
    pub subtotal: f64,
    pub descuento_monto: f64,
    pub impuesto_monto: f64,
    pub total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saldo_pendiente: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
    pub autorizado_sri: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numero_autorizacion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clave_acceso: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_destinatario: Option<String>,
}

impl Searchable for Factura {
    const SEARCH_FIELDS: &'static [&'static str] =
        &["numeroFactura", "clienteNombre", "ordenVentaNumero"];
}

impl AggregateRoot for Factura {
    type Request = FacturaRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> FacturaRequest {
        FacturaRequest {
            numero_factura: self.numero_factura.clone(),
            orden_venta_id: self.orden_venta_id,
            despacho_id: self.despacho_id,
            cliente_id: self.cliente_id,
            direccion_facturacion_id: self.direccion_facturacion_id,
            fecha_emision: date_input(&self.fecha_emision),
            fecha_vencimiento: date_input(&self.fecha_vencimiento),
            forma_pago_id: self.forma_pago_id,
            referencia_pago: self.referencia_pago.clone(),
            subtotal: self.subtotal,
            descuento_monto: self.descuento_monto,
            impuesto_monto: self.impuesto_monto,
            total: self.total,
            saldo_pendiente: self.saldo_pendiente,
            observaciones: self.observaciones.clone(),
            autorizado_sri: self.autorizado_sri,
            numero_autorizacion: self.numero_autorizacion.clone(),
            clave_acceso: self.clave_acceso.clone(),
            email_destinatario: self.email_destinatario.clone(),
        }
    }

    fn display_name(&self) -> String {
        self.numero_factura.clone()
    }

    fn entity_metadata_info() -> EntityMetadataInfo {
        ENTITY_METADATA
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn recompute(request: &mut FacturaRequest) {
        request.total = invoice_total(
            request.subtotal,
            request.descuento_monto,
            request.impuesto_monto,
        );
        request.saldo_pendiente = Some(request.total);
    }

    fn check(request: &FacturaRequest) -> Result<(), FormWarning> {
        check_date_range(&request.fecha_emision, Some(request.fecha_vencimiento.as_str()))
            .map_err(|_| FormWarning::new(DUE_DATE_MESSAGE))
    }

    fn delete_prompt(&self) -> DeletePrompt {
        DeletePrompt::Custom {
            message: format!(
                "¿Está seguro de eliminar la factura \"{}\"?",
                self.numero_factura
            ),
            title: "¿Eliminar?",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factura(estado: InvoiceState) -> Factura {
        Factura {
            id: 1,
            numero_factura: "001-001-000000123".into(),
            total: 115.0,
            estado,
            ..Factura::default()
        }
    }

    #[test]
    fn test_invoice_total() {
        assert!((invoice_total(100.0, 10.0, 13.5) - 103.5).abs() < 1e-9);

        let mut request = FacturaRequest {
            subtotal: 200.0,
            descuento_monto: 20.0,
            impuesto_monto: 27.0,
            ..FacturaRequest::default()
        };
        Factura::recompute(&mut request);
        assert!((request.total - 207.0).abs() < 1e-9);
        assert_eq!(request.saldo_pendiente, Some(request.total));
    }

    #[test]
    fn test_actions_by_state() {
        assert_eq!(
            factura(InvoiceState::Pendiente).actions(),
            vec![
                InvoiceAction::RegistrarPago,
                InvoiceAction::AutorizarSri,
                InvoiceAction::Anular
            ]
        );
        let pagada = Factura {
            autorizado_sri: true,
            saldo_pendiente: Some(0.0),
            ..factura(InvoiceState::Pagada)
        };
        assert_eq!(pagada.actions(), vec![InvoiceAction::Anular]);
        assert!(factura(InvoiceState::Anulada).actions().is_empty());
    }

    #[test]
    fn test_due_date_check_and_filter() {
        let request = FacturaRequest {
            fecha_emision: "2024-03-10".into(),
            fecha_vencimiento: "2024-03-01".into(),
            ..FacturaRequest::default()
        };
        assert_eq!(Factura::check(&request).unwrap_err().message, DUE_DATE_MESSAGE);

        let facturas = vec![
            factura(InvoiceState::Pendiente),
            factura(InvoiceState::Vencida),
        ];
        assert_eq!(filter_by_state(&facturas, None).len(), 2);
        assert_eq!(
            filter_by_state(&facturas, Some(InvoiceState::Vencida))[0].estado,
            InvoiceState::Vencida
        );
    }

    #[test]
    fn test_wire_estado() {
        let json = r#"{"id":3,"numeroFactura":"F-3","estado":"PAGADA","total":10.0}"#;
        let factura: Factura = serde_json::from_str(json).unwrap();
        assert_eq!(factura.estado, InvoiceState::Pagada);
        assert_eq!(factura.saldo(), 10.0);
    }
}
