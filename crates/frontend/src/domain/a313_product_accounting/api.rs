use async_trait::async_trait;
use contracts::domain::a313_product_accounting::{
    ProductoConfiguracionContable, ProductoConfiguracionContableRequest, ENTITY_METADATA,
};
use contracts::shared::api_error::ErrorMessages;

use crate::domain::a306_cost_center::api::CentroCostosApi;
use crate::domain::a307_ledger_account::api::CuentaContableApi;
use crate::domain::a308_valuation_method::api::MetodoValuacionApi;
use crate::domain::a311_product::api::ProductoApi;
use crate::shared::crud::{options, CrudSource, Loaded};
use crate::shared::rest::{ResourceDef, RestResource};

pub struct ConfiguracionContableApi;

impl ResourceDef for ConfiguracionContableApi {
    type Response = ProductoConfiguracionContable;
    type Request = ProductoConfiguracionContableRequest;
    const PATH: &'static str = "/producto-configuracion-contable";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}

#[derive(Clone, Copy, Default)]
pub struct ConfiguracionContableSource;

#[async_trait(?Send)]
impl CrudSource for ConfiguracionContableSource {
    type Entity = ProductoConfiguracionContable;
    type Resource = ConfiguracionContableApi;

    async fn load(&self) -> Result<Loaded<ProductoConfiguracionContable>, String> {
        let configuracion_contable_api = RestResource::<ConfiguracionContableApi>::new();
        let producto_api = RestResource::<ProductoApi>::new();
        let cuenta_contable_api = RestResource::<CuentaContableApi>::new();
        let centro_costos_api = RestResource::<CentroCostosApi>::new();
        let metodo_valuacion_api = RestResource::<MetodoValuacionApi>::new();
        let (configuraciones, productos, cuentas, centros, metodos) = futures::try_join!(
            configuracion_contable_api.find_all(),
            producto_api.find_all(),
            cuenta_contable_api.find_all(),
            centro_costos_api.find_all(),
            metodo_valuacion_api.find_all(),
        )?;

        Ok(Loaded::rows(configuraciones)
            .with_options("productoId", options(&productos, |p| p.id, |p| p.label()))
            .with_options("cuentaContableId", options(&cuentas, |c| c.id, |c| c.nombre.clone()))
            .with_options("centroCostosId", options(&centros, |c| c.id, |c| c.nombre.clone()))
            .with_options(
                "metodoValuacionId",
                options(&metodos, |m| m.id, |m| m.nombre.clone()),
            ))
    }
}
