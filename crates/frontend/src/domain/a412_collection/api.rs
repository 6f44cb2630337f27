use async_trait::async_trait;
use contracts::domain::a412_collection::{
    AnulacionRequest, Cobro, CobroRequest, CollectionAction, ENTITY_METADATA,
};
use contracts::shared::api_error::ErrorMessages;

use crate::domain::a404_payment_method::api::FormaPagoApi;
use crate::domain::a407_customer::api::load_clientes;
use crate::shared::crud::{options, CrudSource, Loaded};
use crate::shared::rest::{empty_body, ResourceDef, RestResource};

pub struct CobroApi;

impl ResourceDef for CobroApi {
    type Response = Cobro;
    type Request = CobroRequest;
    const PATH: &'static str = "/ventas/cobros";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}

pub async fn confirmar(id: i64) -> Result<(), String> {
    RestResource::<CobroApi>::new()
        .patch_action(id, CollectionAction::Confirmar.path(), &empty_body())
        .await
}

pub async fn anular(id: i64, request: AnulacionRequest) -> Result<(), String> {
    RestResource::<CobroApi>::new()
        .patch_action(id, CollectionAction::Anular.path(), &request)
        .await
}

#[derive(Clone, Copy)]
pub struct CobroSource;

#[async_trait(?Send)]
impl CrudSource for CobroSource {
    type Entity = Cobro;
    type Resource = CobroApi;

    async fn load(&self) -> Result<Loaded<Cobro>, String> {
        let cobro_api = RestResource::<CobroApi>::new();
        let forma_pago_api = RestResource::<FormaPagoApi>::new();
        let (cobros, clientes, formas) = futures::try_join!(
            cobro_api.find_all(),
            load_clientes(),
            forma_pago_api.find_all(),
        )?;

        Ok(Loaded::rows(cobros)
            .with_options("clienteId", options(&clientes, |c| c.id, |c| c.label()))
            .with_options("formaPagoId", options(&formas, |f| f.id, |f| f.nombre.clone())))
    }
}
