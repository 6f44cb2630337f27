use contracts::domain::a402_customer_type::{TipoCliente, TipoClienteRequest, ENTITY_METADATA};
use contracts::shared::api_error::ErrorMessages;

use crate::shared::rest::{ResourceDef, RestResource};

pub struct TipoClienteApi;

impl ResourceDef for TipoClienteApi {
    type Response = TipoCliente;
    type Request = TipoClienteRequest;
    const PATH: &'static str = "/ventas/tipos-cliente";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}

pub const SCOPES: &[(&str, &str)] = &[("", "Todos"), ("/activos", "Activos")];

pub async fn find_by_codigo(codigo: String) -> Result<TipoCliente, String> {
    RestResource::<TipoClienteApi>::new()
        .get_one(&format!("/codigo/{}", urlencoding::encode(&codigo)))
        .await
}
