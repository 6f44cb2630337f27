use async_trait::async_trait;
use contracts::domain::a409_customer_address::{enrich, DireccionCliente, DireccionClienteRequest, ENTITY_METADATA};
use contracts::shared::api_error::ErrorMessages;
use leptos::prelude::*;

use crate::domain::a407_customer::api::load_clientes;
use crate::shared::crud::{list_by, options, CrudSource, Loaded};
use crate::shared::rest::ResourceDef;

pub struct DireccionClienteApi;

impl ResourceDef for DireccionClienteApi {
    type Response = DireccionCliente;
    type Request = DireccionClienteRequest;
    const PATH: &'static str = "/ventas/direcciones-cliente";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}

/// Todas las direcciones o las de un cliente (`/cliente/{id}`)
#[derive(Clone, Copy)]
pub struct DireccionClienteSource {
    pub cliente_id: RwSignal<Option<i64>>,
}

impl DireccionClienteSource {
    pub fn new() -> Self {
        Self {
            cliente_id: RwSignal::new(None),
        }
    }
}

#[async_trait(?Send)]
impl CrudSource for DireccionClienteSource {
    type Entity = DireccionCliente;
    type Resource = DireccionClienteApi;

    async fn load(&self) -> Result<Loaded<DireccionCliente>, String> {
        let (direcciones, clientes) = futures::try_join!(
            list_by::<DireccionClienteApi>("/cliente", self.cliente_id.get_untracked()),
            load_clientes(),
        )?;

        Ok(Loaded::rows(enrich(direcciones, &clientes))
            .with_options("clienteId", options(&clientes, |c| c.id, |c| c.label())))
    }
}
