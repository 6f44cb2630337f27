use contracts::domain::a305_business_line::{LineaNegocio, LineaNegocioRequest, ENTITY_METADATA};
use contracts::shared::api_error::ErrorMessages;

use crate::shared::rest::ResourceDef;

pub struct LineaNegocioApi;

impl ResourceDef for LineaNegocioApi {
    type Response = LineaNegocio;
    type Request = LineaNegocioRequest;
    const PATH: &'static str = "/linea-negocio";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}
