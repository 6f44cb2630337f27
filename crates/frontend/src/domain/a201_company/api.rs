use contracts::domain::a201_company::{Empresa, EmpresaRequest, ENTITY_METADATA};
use contracts::shared::api_error::ErrorMessages;

use crate::shared::rest::{ResourceDef, RestResource};

pub struct EmpresaApi;

impl ResourceDef for EmpresaApi {
    type Response = Empresa;
    type Request = EmpresaRequest;
    const PATH: &'static str = "/empresa";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}

pub async fn find_by_nit(nit: String) -> Result<Empresa, String> {
    RestResource::<EmpresaApi>::new()
        .get_one(&format!("/nit/{}", urlencoding::encode(&nit)))
        .await
}
