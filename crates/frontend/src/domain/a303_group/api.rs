use contracts::domain::a303_group::{Grupo, GrupoRequest, ENTITY_METADATA};
use contracts::shared::api_error::ErrorMessages;

use crate::shared::rest::ResourceDef;

pub struct GrupoApi;

impl ResourceDef for GrupoApi {
    type Response = Grupo;
    type Request = GrupoRequest;
    const PATH: &'static str = "/grupo";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}
