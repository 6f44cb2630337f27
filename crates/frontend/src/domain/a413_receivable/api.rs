use async_trait::async_trait;
use contracts::domain::a413_receivable::{CuentaPorCobrar, CuentaPorCobrarRequest, ENTITY_METADATA};
use contracts::shared::api_error::ErrorMessages;
use leptos::prelude::*;

use crate::domain::a407_customer::api::load_clientes;
use crate::domain::a410_invoice::api::load_facturas;
use crate::shared::crud::{options, scoped_list, CrudSource, Loaded};
use crate::shared::rest::ResourceDef;

pub struct CuentaPorCobrarApi;

impl ResourceDef for CuentaPorCobrarApi {
    type Response = CuentaPorCobrar;
    type Request = CuentaPorCobrarRequest;
    const PATH: &'static str = "/ventas/cuentas-por-cobrar";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}

pub const SCOPES: &[(&str, &str)] = &[
    ("", "Todas"),
    ("/pendientes", "Pendientes (servidor)"),
    ("/vencidas", "Vencidas (servidor)"),
];

#[derive(Clone, Copy)]
pub struct CuentaPorCobrarSource {
    pub scope: RwSignal<&'static str>,
}

impl CuentaPorCobrarSource {
    pub fn new() -> Self {
        Self {
            scope: RwSignal::new(""),
        }
    }
}

#[async_trait(?Send)]
impl CrudSource for CuentaPorCobrarSource {
    type Entity = CuentaPorCobrar;
    type Resource = CuentaPorCobrarApi;

    async fn load(&self) -> Result<Loaded<CuentaPorCobrar>, String> {
        let (cuentas, facturas, clientes) = futures::try_join!(
            scoped_list::<CuentaPorCobrarApi>(self.scope.get_untracked()),
            load_facturas(),
            load_clientes(),
        )?;

        Ok(Loaded::rows(cuentas)
            .with_options("facturaId", options(&facturas, |f| f.id, |f| f.numero_factura.clone()))
            .with_options("clienteId", options(&clientes, |c| c.id, |c| c.label())))
    }
}
