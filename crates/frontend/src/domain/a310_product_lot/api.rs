use contracts::domain::a310_product_lot::{ProductoLote, ProductoLoteRequest, ENTITY_METADATA};
use contracts::shared::api_error::ErrorMessages;

use crate::shared::rest::ResourceDef;

pub struct ProductoLoteApi;

impl ResourceDef for ProductoLoteApi {
    type Response = ProductoLote;
    type Request = ProductoLoteRequest;
    const PATH: &'static str = "/producto-lote";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}
