use contracts::domain::a307_ledger_account::{CuentaContable, CuentaContableRequest, ENTITY_METADATA};
use contracts::shared::api_error::ErrorMessages;

use crate::shared::rest::ResourceDef;

pub struct CuentaContableApi;

impl ResourceDef for CuentaContableApi {
    type Response = CuentaContable;
    type Request = CuentaContableRequest;
    const PATH: &'static str = "/cuenta-contable";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}
