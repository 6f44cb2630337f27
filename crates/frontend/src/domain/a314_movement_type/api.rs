use contracts::domain::a314_movement_type::{TipoMovimiento, TipoMovimientoRequest, ENTITY_METADATA};
use contracts::shared::api_error::ErrorMessages;

use crate::shared::rest::ResourceDef;

pub struct TipoMovimientoApi;

impl ResourceDef for TipoMovimientoApi {
    type Response = TipoMovimiento;
    type Request = TipoMovimientoRequest;
    const PATH: &'static str = "/tipo-movimiento";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}
