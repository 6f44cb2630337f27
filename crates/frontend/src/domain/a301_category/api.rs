use contracts::domain::a301_category::{Categoria, CategoriaRequest, ENTITY_METADATA};
use contracts::shared::api_error::ErrorMessages;

use crate::shared::rest::ResourceDef;

pub struct CategoriaApi;

impl ResourceDef for CategoriaApi {
    type Response = Categoria;
    type Request = CategoriaRequest;
    const PATH: &'static str = "/categoria";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}
