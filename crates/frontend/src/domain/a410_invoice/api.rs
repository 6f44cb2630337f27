use async_trait::async_trait;
use contracts::domain::a410_invoice::{Factura, FacturaRequest, InvoiceAction, ENTITY_METADATA};
use contracts::shared::api_error::ErrorMessages;
use serde::Serialize;

use crate::domain::a404_payment_method::api::FormaPagoApi;
use crate::domain::a407_customer::api::load_clientes;
use crate::domain::a409_customer_address::api::DireccionClienteApi;
use crate::shared::crud::{options, CrudSource, Loaded};
use crate::shared::rest::{ResourceDef, RestResource};

pub struct FacturaApi;

impl ResourceDef for FacturaApi {
    type Response = Factura;
    type Request = FacturaRequest;
    const PATH: &'static str = "/ventas/facturas";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}

/// `POST /{id}/<accion>` con el cuerpo de la acción
pub async fn invoice_action<B: Serialize + ?Sized>(
    id: i64,
    action: InvoiceAction,
    body: &B,
) -> Result<(), String> {
    RestResource::<FacturaApi>::new()
        .post_action(id, action.path(), body)
        .await
}

pub async fn load_facturas() -> Result<Vec<Factura>, String> {
    RestResource::<FacturaApi>::new().find_all().await
}

#[derive(Clone, Copy)]
pub struct FacturaSource;

#[async_trait(?Send)]
impl CrudSource for FacturaSource {
    type Entity = Factura;
    type Resource = FacturaApi;

    async fn load(&self) -> Result<Loaded<Factura>, String> {
        let direccion_cliente_api = RestResource::<DireccionClienteApi>::new();
        let forma_pago_api = RestResource::<FormaPagoApi>::new();
        let (facturas, clientes, direcciones, formas) = futures::try_join!(
            load_facturas(),
            load_clientes(),
            direccion_cliente_api.find_all(),
            forma_pago_api.find_all(),
        )?;

        Ok(Loaded::rows(facturas)
            .with_options("clienteId", options(&clientes, |c| c.id, |c| c.label()))
            .with_options(
                "direccionFacturacionId",
                options(&direcciones, |d| d.id, |d| {
                    d.direccion_completa.clone().unwrap_or_else(|| d.direccion.clone())
                }),
            )
            .with_options("formaPagoId", options(&formas, |f| f.id, |f| f.nombre.clone())))
    }
}
