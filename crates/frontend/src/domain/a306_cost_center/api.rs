use contracts::domain::a306_cost_center::{CentroCostos, CentroCostosRequest, ENTITY_METADATA};
use contracts::shared::api_error::ErrorMessages;

use crate::shared::rest::ResourceDef;

pub struct CentroCostosApi;

impl ResourceDef for CentroCostosApi {
    type Response = CentroCostos;
    type Request = CentroCostosRequest;
    const PATH: &'static str = "/centro-costos";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}
