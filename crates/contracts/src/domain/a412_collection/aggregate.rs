use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use super::state::{CollectionAction, CollectionState, NOT_PENDING_EDIT};
use crate::domain::common::{date_input, AggregateRoot};
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use crate::shared::search::Searchable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cobro {
    pub id: i64,
    pub numero_cobro: String,
    pub cliente_id: i64,
    pub cliente_nombre: String,
    pub fecha_cobro: String,
    pub forma_pago_id: i64,
    pub forma_pago_nombre: String,
    pub banco_id: Option<i64>,
    pub numero_documento: Option<String>,
    pub fecha_documento: Option<String>,
    pub monto_total: f64,
    pub monto_aplicado: f64,
    pub monto_disponible: f64,
    pub caja_id: Option<i64>,
    pub cajero_id: Option<i64>,
    pub movimiento_caja_id: Option<i64>,
    pub tipo_cambio: Option<f64>,
    pub moneda: Option<String>,
    pub estado: CollectionState,
    pub observaciones: Option<String>,
    pub activo: bool,
    pub fecha_creacion: Option<String>,
    pub fecha_modificacion: Option<String>,
    pub usuario_creacion_id: Option<i64>,
    pub fecha_confirmacion: Option<String>,
    pub confirmado_por_id: Option<i64>,
    pub fecha_anulacion: Option<String>,
    pub anulado_por_id: Option<i64>,
    pub motivo_anulacion: Option<String>,
    pub tiene_saldo_disponible: Option<bool>,
}

impl Cobro {
    pub fn actions(&self) -> Vec<CollectionAction> {
        let mut actions = Vec::new();
        if self.estado.can_confirm().is_ok() {
            actions.push(CollectionAction::Confirmar);
        }
        if self.estado.can_void().is_ok() {
            actions.push(CollectionAction::Anular);
        }
        actions
    }

    pub fn confirm_prompt(&self) -> String {
        format!("¿Confirmar el cobro {}?", self.numero_cobro)
    }
}

/// Filtro por estado; `None` equivale a "TODOS"
pub fn filter_by_state(cobros: &[Cobro], estado: Option<CollectionState>) -> Vec<Cobro> {
    cobros
        .iter()
        .filter(|c| estado.map_or(true, |e| c.estado == e))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CobroRequest {
    pub numero_cobro: String,
    pub cliente_id: i64,
    pub fecha_cobro: String,
    pub forma_pago_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banco_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numero_documento: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_documento: Option<String>,
    pub monto_total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caja_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cajero_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo_cambio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moneda: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
}

impl Default for CobroRequest {
    fn default() -> Self {
        Self {
            numero_cobro: String::new(),
            cliente_id: 0,
            fecha_cobro: String::new(),
            forma_pago_id: 0,
            banco_id: None,
            numero_documento: None,
            fecha_documento: None,
            monto_total: 0.0,
            caja_id: None,
            cajero_id: None,
            tipo_cambio: Some(1.0),
            moneda: Some("USD".to_string()),
            observaciones: None,
        }
    }
}

impl Searchable for Cobro {
    const SEARCH_FIELDS: &'static [&'static str] =
        &["numeroCobro", "clienteNombre", "formaPagoNombre"];
}

impl AggregateRoot for Cobro {
    type Request = CobroRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> CobroRequest {
        CobroRequest {
            numero_cobro: self.numero_cobro.clone(),
            cliente_id: self.cliente_id,
            fecha_cobro: date_input(&self.fecha_cobro),
            forma_pago_id: self.forma_pago_id,
            banco_id: self.banco_id,
            numero_documento: self.numero_documento.clone(),
            fecha_documento: self.fecha_documento.as_deref().map(date_input),
            monto_total: self.monto_total,
            caja_id: self.caja_id,
            cajero_id: self.cajero_id,
            tipo_cambio: self.tipo_cambio,
            moneda: self.moneda.clone(),
            observaciones: self.observaciones.clone(),
        }
    }

    fn display_name(&self) -> String {
        self.numero_cobro.clone()
    }

    fn entity_metadata_info() -> EntityMetadataInfo {
        ENTITY_METADATA
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn edit_guard(&self) -> Result<(), &'static str> {
        if self.estado == CollectionState::Pendiente {
            Ok(())
        } else {
            Err(NOT_PENDING_EDIT)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::validate_form;

    fn cobro(estado: CollectionState) -> Cobro {
        Cobro {
            id: 7,
            numero_cobro: "COB-0007".into(),
            estado,
            ..Cobro::default()
        }
    }

    #[test]
    fn test_edit_only_pending() {
        assert!(cobro(CollectionState::Pendiente).edit_guard().is_ok());
        assert_eq!(
            cobro(CollectionState::Confirmado).edit_guard(),
            Err(NOT_PENDING_EDIT)
        );
    }

    #[test]
    fn test_actions() {
        assert_eq!(
            cobro(CollectionState::Pendiente).actions(),
            vec![CollectionAction::Confirmar, CollectionAction::Anular]
        );
        assert_eq!(
            cobro(CollectionState::Confirmado).actions(),
            vec![CollectionAction::Anular]
        );
        assert!(cobro(CollectionState::Anulado).actions().is_empty());
        assert_eq!(
            cobro(CollectionState::Pendiente).confirm_prompt(),
            "¿Confirmar el cobro COB-0007?"
        );
    }

    #[test]
    fn test_new_collection_defaults() {
        let request = CobroRequest::default();
        assert_eq!(request.moneda.as_deref(), Some("USD"));
        let errors = validate_form(&request, FIELDS);
        assert_eq!(
            errors.get("montoTotal").map(String::as_str),
            Some("Debe ser mayor o igual a 0.01")
        );
        assert!(errors.contains_key("clienteId"));
        assert!(errors.contains_key("formaPagoId"));
    }

    #[test]
    fn test_filter_by_state() {
        let cobros = vec![
            cobro(CollectionState::Pendiente),
            cobro(CollectionState::Anulado),
        ];
        let anulados = filter_by_state(&cobros, Some(CollectionState::Anulado));
        assert_eq!(anulados.len(), 1);
        assert_eq!(filter_by_state(&cobros, None).len(), 2);
    }
}
