use serde::{Deserialize, Serialize};

use super::lines::{MovementLines, MovementState, EMPTY_LINES_MESSAGE};
use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::a316_movement_line::DetalleMovimiento;
use crate::domain::common::{truncate_datetime, AggregateRoot};
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata, FormWarning};
use crate::shared::search::Searchable;

pub const NOT_DRAFT_MESSAGE: &str = "Solo se pueden editar movimientos en estado Borrador";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MovimientoInventario {
    pub id: i64,
    pub numero_movimiento: String,
    pub tipo_movimiento_id: i64,
    pub tipo_movimiento_nombre: String,
    pub bodega_origen_id: Option<i64>,
    pub bodega_destino_id: Option<i64>,
    pub fecha_movimiento: String,
    pub fecha_contabilizacion: Option<String>,
    pub documento_referencia: Option<String>,
    pub tipo_documento_referencia: Option<String>,
    pub motivo: Option<String>,
    pub observaciones: Option<String>,
    pub estado: MovementState,
    pub detalles: Vec<DetalleMovimiento>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovimientoInventarioRequest {
    pub numero_movimiento: String,
    pub tipo_movimiento_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bodega_origen_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bodega_destino_id: Option<i64>,
    pub fecha_movimiento: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_contabilizacion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documento_referencia: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo_documento_referencia: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motivo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
    pub estado: MovementState,
    pub detalles: MovementLines,
}

impl Default for MovimientoInventarioRequest {
    fn default() -> Self {
        Self {
            numero_movimiento: String::new(),
            tipo_movimiento_id: 0,
            bodega_origen_id: None,
            bodega_destino_id: None,
            fecha_movimiento: String::new(),
            fecha_contabilizacion: None,
            documento_referencia: None,
            tipo_documento_referencia: None,
            motivo: None,
            observaciones: None,
            estado: MovementState::Borrador,
            detalles: MovementLines::draft(),
        }
    }
}

impl MovimientoInventario {
    /// Total del movimiento según el costo calculado por el backend
    pub fn total(&self) -> f64 {
        self.detalles.iter().map(|d| d.costo_total).sum()
    }
}

impl Searchable for MovimientoInventario {
    const SEARCH_FIELDS: &'static [&'static str] =
        &["numeroMovimiento", "tipoMovimientoNombre", "estado", "id"];
}

impl AggregateRoot for MovimientoInventario {
    type Request = MovimientoInventarioRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> MovimientoInventarioRequest {
        MovimientoInventarioRequest {
            numero_movimiento: self.numero_movimiento.clone(),
            tipo_movimiento_id: self.tipo_movimiento_id,
            bodega_origen_id: self.bodega_origen_id,
            bodega_destino_id: self.bodega_destino_id,
            fecha_movimiento: truncate_datetime(&self.fecha_movimiento),
            fecha_contabilizacion: self.fecha_contabilizacion.as_deref().map(truncate_datetime),
            documento_referencia: self.documento_referencia.clone(),
            tipo_documento_referencia: self.tipo_documento_referencia.clone(),
            motivo: self.motivo.clone(),
            observaciones: self.observaciones.clone(),
            estado: self.estado,
            detalles: self.detalles.iter().map(|d| d.to_request()).collect(),
        }
    }

    fn display_name(&self) -> String {
        self.numero_movimiento.clone()
    }

    fn entity_metadata_info() -> EntityMetadataInfo {
        ENTITY_METADATA
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn check(request: &MovimientoInventarioRequest) -> Result<(), FormWarning> {
        if request.detalles.is_empty() {
            return Err(FormWarning::new(EMPTY_LINES_MESSAGE));
        }
        if !request.detalles.invalid_lines().is_empty() {
            return Err(FormWarning::new(ENTITY_METADATA.invalid_form));
        }
        Ok(())
    }

    fn edit_guard(&self) -> Result<(), &'static str> {
        if self.estado.is_draft() {
            Ok(())
        } else {
            Err(NOT_DRAFT_MESSAGE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a316_movement_line::DetalleMovimientoRequest;

    fn movimiento() -> MovimientoInventario {
        serde_json::from_str(
            r#"{
                "id": 12,
                "numeroMovimiento": "MOV-0001",
                "tipoMovimientoId": 1,
                "tipoMovimientoNombre": "Ingreso por compra",
                "bodegaOrigenId": null,
                "bodegaDestinoId": 2,
                "fechaMovimiento": "2024-03-05T14:30:00",
                "fechaContabilizacion": null,
                "documentoReferencia": "FAC-1",
                "tipoDocumentoReferencia": null,
                "motivo": null,
                "observaciones": null,
                "estado": "BORRADOR",
                "detalles": [
                    {"id": 1, "productoId": 3, "productoNombre": "Arroz", "loteId": null,
                     "cantidad": 10, "costoUnitario": 2.5, "costoTotal": 25}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_create_starts_as_draft_with_one_line() {
        let request = MovimientoInventarioRequest::default();
        assert_eq!(request.estado, MovementState::Borrador);
        assert_eq!(request.detalles.len(), 1);
        assert_eq!(request.detalles.get(0).map(|l| l.cantidad), Some(1.0));
    }

    #[test]
    fn test_edit_truncates_date_and_loads_lines() {
        let mov = movimiento();
        let request = mov.to_request();
        assert_eq!(request.fecha_movimiento, "2024-03-05T14:30");
        assert_eq!(request.detalles.len(), 1);
        assert_eq!(request.detalles.total(), 25.0);
        assert_eq!(mov.total(), 25.0);
        assert_eq!(request.documento_referencia.as_deref(), Some("FAC-1"));
    }

    #[test]
    fn test_edit_keeps_null_optionals_out_of_body() {
        let request = movimiento().to_request();
        assert_eq!(request.motivo, None);
        assert_eq!(request.tipo_documento_referencia, None);

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["documentoReferencia"], "FAC-1");
        assert!(body.get("motivo").is_none());
        assert!(body.get("observaciones").is_none());
        assert!(body.get("tipoDocumentoReferencia").is_none());
        assert!(body["detalles"][0].get("ubicacionFisica").is_none());
        assert!(body["detalles"][0].get("observaciones").is_none());

        let back: MovimientoInventarioRequest = serde_json::from_value(body).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn test_check_requires_lines() {
        let mut request = movimiento().to_request();
        assert!(MovimientoInventario::check(&request).is_ok());

        request.detalles.remove_line(0);
        let warning = MovimientoInventario::check(&request).unwrap_err();
        assert_eq!(warning.message, EMPTY_LINES_MESSAGE);

        request.detalles.add_line();
        let warning = MovimientoInventario::check(&request).unwrap_err();
        assert_eq!(warning.message, ENTITY_METADATA.invalid_form);
    }

    #[test]
    fn test_only_drafts_are_editable() {
        let mut mov = movimiento();
        assert!(mov.edit_guard().is_ok());
        mov.estado = MovementState::Confirmado;
        assert_eq!(mov.edit_guard(), Err(NOT_DRAFT_MESSAGE));
    }

    #[test]
    fn test_request_wire_format() {
        let mut request = MovimientoInventarioRequest {
            numero_movimiento: "MOV-2".into(),
            tipo_movimiento_id: 1,
            fecha_movimiento: "2024-03-05T14:30".into(),
            ..MovimientoInventarioRequest::default()
        };
        request.detalles.set_line(
            0,
            DetalleMovimientoRequest {
                producto_id: 3,
                cantidad: 10.0,
                costo_unitario: 2.5,
                ..DetalleMovimientoRequest::default()
            },
        );
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["estado"], "BORRADOR");
        assert_eq!(body["detalles"][0]["productoId"], 3);
        assert_eq!(body["detalles"][0]["costoUnitario"], 2.5);
        assert!(body.get("bodegaOrigenId").is_none());
    }
}
