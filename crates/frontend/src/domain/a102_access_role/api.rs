use contracts::domain::a102_access_role::{RolAcceso, RolAccesoRequest, ENTITY_METADATA};
use contracts::shared::api_error::ErrorMessages;

use crate::shared::rest::ResourceDef;

pub struct RolAccesoApi;

impl ResourceDef for RolAccesoApi {
    type Response = RolAcceso;
    type Request = RolAccesoRequest;
    const PATH: &'static str = "/roles-acceso";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}
