use contracts::domain::a101_employee::{Persona, PersonaRequest, ENTITY_METADATA};
use contracts::shared::api_error::ErrorMessages;

use crate::shared::rest::ResourceDef;

pub struct PersonaApi;

impl ResourceDef for PersonaApi {
    type Response = Persona;
    type Request = PersonaRequest;
    const PATH: &'static str = "/personas";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
    const RETRIES: u32 = 2;
}
