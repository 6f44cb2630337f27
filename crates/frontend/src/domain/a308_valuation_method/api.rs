use contracts::domain::a308_valuation_method::{MetodoValuacion, MetodoValuacionRequest, ENTITY_METADATA};
use contracts::shared::api_error::ErrorMessages;

use crate::shared::rest::ResourceDef;

pub struct MetodoValuacionApi;

impl ResourceDef for MetodoValuacionApi {
    type Response = MetodoValuacion;
    type Request = MetodoValuacionRequest;
    const PATH: &'static str = "/metodo-valuacion";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}
