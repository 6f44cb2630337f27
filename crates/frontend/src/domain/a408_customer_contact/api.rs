use async_trait::async_trait;
use contracts::domain::a408_customer_contact::{enrich, ContactoCliente, ContactoClienteRequest, ENTITY_METADATA};
use contracts::shared::api_error::ErrorMessages;
use leptos::prelude::*;

use crate::domain::a407_customer::api::load_clientes;
use crate::shared::crud::{list_by, options, CrudSource, Loaded};
use crate::shared::rest::ResourceDef;

pub struct ContactoClienteApi;

impl ResourceDef for ContactoClienteApi {
    type Response = ContactoCliente;
    type Request = ContactoClienteRequest;
    const PATH: &'static str = "/ventas/contactos-cliente";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}

/// Todas las contactos o las de un cliente (`/cliente/{id}`)
#[derive(Clone, Copy)]
pub struct ContactoClienteSource {
    pub cliente_id: RwSignal<Option<i64>>,
}

impl ContactoClienteSource {
    pub fn new() -> Self {
        Self {
            cliente_id: RwSignal::new(None),
        }
    }
}

#[async_trait(?Send)]
impl CrudSource for ContactoClienteSource {
    type Entity = ContactoCliente;
    type Resource = ContactoClienteApi;

    async fn load(&self) -> Result<Loaded<ContactoCliente>, String> {
        let (contactos, clientes) = futures::try_join!(
            list_by::<ContactoClienteApi>("/cliente", self.cliente_id.get_untracked()),
            load_clientes(),
        )?;

        Ok(Loaded::rows(enrich(contactos, &clientes))
            .with_options("clienteId", options(&clientes, |c| c.id, |c| c.label())))
    }
}
