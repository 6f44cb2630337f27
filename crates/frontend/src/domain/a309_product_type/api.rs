use contracts::domain::a309_product_type::{ProductoTipo, ProductoTipoRequest, ENTITY_METADATA};
use contracts::shared::api_error::ErrorMessages;

use crate::shared::rest::ResourceDef;

pub struct ProductoTipoApi;

impl ResourceDef for ProductoTipoApi {
    type Response = ProductoTipo;
    type Request = ProductoTipoRequest;
    const PATH: &'static str = "/producto-tipo";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}
