use contracts::domain::a403_payment_term::{CondicionPago, CondicionPagoRequest, ENTITY_METADATA};
use contracts::shared::api_error::ErrorMessages;

use crate::shared::rest::{ResourceDef, RestResource};

pub struct CondicionPagoApi;

impl ResourceDef for CondicionPagoApi {
    type Response = CondicionPago;
    type Request = CondicionPagoRequest;
    const PATH: &'static str = "/ventas/condiciones-pago";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}

pub const SCOPES: &[(&str, &str)] = &[
    ("", "Todas"),
    ("/activas", "Activas"),
    ("/credito", "Crédito"),
    ("/contado", "Contado"),
];

/// Condición marcada como predeterminada
pub async fn find_predeterminada() -> Result<CondicionPago, String> {
    RestResource::<CondicionPagoApi>::new()
        .get_one("/predeterminada")
        .await
}
