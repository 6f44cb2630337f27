use async_trait::async_trait;
use contracts::domain::a407_customer::{Cliente, ClienteRequest, ENTITY_METADATA};
use contracts::shared::api_error::ErrorMessages;
use leptos::prelude::*;

use crate::domain::a101_employee::api::PersonaApi;
use crate::domain::a402_customer_type::api::TipoClienteApi;
use crate::domain::a401_sales_zone::api::ZonaVentaApi;
use crate::domain::a403_payment_term::api::CondicionPagoApi;
use crate::domain::a405_price_list::api::ListaPreciosApi;
use crate::shared::crud::{list_by, options, scoped_list, CrudSource, Loaded};
use crate::shared::rest::{ResourceDef, RestResource};

pub struct ClienteApi;

impl ResourceDef for ClienteApi {
    type Response = Cliente;
    type Request = ClienteRequest;
    const PATH: &'static str = "/ventas/clientes";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}

pub const SCOPES: &[(&str, &str)] = &[("", "Todos"), ("/activos", "Activos")];

pub async fn find_by_identificacion(numero: String) -> Result<Cliente, String> {
    RestResource::<ClienteApi>::new()
        .get_one(&format!("/identificacion/{}", urlencoding::encode(&numero)))
        .await
}

pub async fn search_by_razon_social(razon_social: &str) -> Result<Vec<Cliente>, String> {
    RestResource::<ClienteApi>::new()
        .get_list_query("/buscar", &[("razonSocial", razon_social)])
        .await
}

/// Clientes con todos sus catálogos; también para facturas y cobros
pub async fn load_clientes() -> Result<Vec<Cliente>, String> {
    RestResource::<ClienteApi>::new().find_all().await
}

/// Filtra por vendedor (`/vendedor/{id}`); sin vendedor aplica el alcance
#[derive(Clone, Copy)]
pub struct ClienteSource {
    pub scope: RwSignal<&'static str>,
    pub vendedor_id: RwSignal<Option<i64>>,
}

impl ClienteSource {
    pub fn new() -> Self {
        Self {
            scope: RwSignal::new(""),
            vendedor_id: RwSignal::new(None),
        }
    }

    async fn clientes(&self) -> Result<Vec<Cliente>, String> {
        match self.vendedor_id.get_untracked() {
            Some(id) => list_by::<ClienteApi>("/vendedor", Some(id)).await,
            None => scoped_list::<ClienteApi>(self.scope.get_untracked()).await,
        }
    }
}

#[async_trait(?Send)]
impl CrudSource for ClienteSource {
    type Entity = Cliente;
    type Resource = ClienteApi;

    async fn load(&self) -> Result<Loaded<Cliente>, String> {
        let tipo_cliente_api = RestResource::<TipoClienteApi>::new();
        let zona_venta_api = RestResource::<ZonaVentaApi>::new();
        let persona_api = RestResource::<PersonaApi>::new();
        let lista_precios_api = RestResource::<ListaPreciosApi>::new();
        let condicion_pago_api = RestResource::<CondicionPagoApi>::new();
        let (clientes, tipos, zonas, vendedores, listas, condiciones) = futures::try_join!(
            self.clientes(),
            tipo_cliente_api.find_all(),
            zona_venta_api.find_all(),
            persona_api.find_all(),
            lista_precios_api.find_all(),
            condicion_pago_api.find_all(),
        )?;

        Ok(Loaded::rows(clientes)
            .with_options("tipoClienteId", options(&tipos, |t| t.id, |t| t.nombre.clone()))
            .with_options("zonaVentaId", options(&zonas, |z| z.id, |z| z.nombre.clone()))
            .with_options(
                "vendedorId",
                options(&vendedores, |p| p.id, |p| format!("{} - {}", p.nombre, p.cedula)),
            )
            .with_options("listaPreciosId", options(&listas, |l| l.id, |l| l.nombre.clone()))
            .with_options("condicionPagoId", options(&condiciones, |c| c.id, |c| c.nombre.clone())))
    }
}
