use contracts::domain::a404_payment_method::{FormaPago, FormaPagoRequest, ENTITY_METADATA};
use contracts::shared::api_error::ErrorMessages;

use crate::shared::rest::{ResourceDef, RestResource};

pub struct FormaPagoApi;

impl ResourceDef for FormaPagoApi {
    type Response = FormaPago;
    type Request = FormaPagoRequest;
    const PATH: &'static str = "/ventas/formas-pago";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}

pub const SCOPES: &[(&str, &str)] = &[("", "Todas"), ("/activos", "Activas")];

pub async fn find_by_codigo(codigo: String) -> Result<FormaPago, String> {
    RestResource::<FormaPagoApi>::new()
        .get_one(&format!("/codigo/{}", urlencoding::encode(&codigo)))
        .await
}
