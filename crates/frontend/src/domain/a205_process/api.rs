use contracts::domain::a205_process::{Proceso, ProcesoRequest, ENTITY_METADATA};
use contracts::shared::api_error::ErrorMessages;

use crate::shared::api_utils::ApiBase;
use crate::shared::rest::{ResourceDef, RestResource};

pub struct ProcesoApi;

impl ResourceDef for ProcesoApi {
    type Response = Proceso;
    type Request = ProcesoRequest;
    const PATH: &'static str = "/empresa/procesos";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
    const BASE: ApiBase = ApiBase::Public;
}

pub async fn find_by_codigo(codigo: String) -> Result<Proceso, String> {
    RestResource::<ProcesoApi>::new()
        .get_one(&format!("/codigo/{}", urlencoding::encode(&codigo)))
        .await
}

/// `GET /buscar?nombre=...`
pub async fn search_by_nombre(nombre: &str) -> Result<Vec<Proceso>, String> {
    RestResource::<ProcesoApi>::new()
        .get_list_query("/buscar", &[("nombre", nombre)])
        .await
}
