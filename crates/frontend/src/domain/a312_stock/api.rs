use async_trait::async_trait;
use contracts::domain::a312_stock::{ProductoExistencias, ProductoExistenciasRequest, ENTITY_METADATA};
use contracts::shared::api_error::ErrorMessages;

use crate::domain::a202_warehouse::api::{bodega_label, BodegaApi};
use crate::domain::a310_product_lot::api::ProductoLoteApi;
use crate::domain::a311_product::api::ProductoApi;
use crate::shared::crud::{options, CrudSource, Loaded};
use crate::shared::rest::{ResourceDef, RestResource};

pub struct ProductoExistenciasApi;

impl ResourceDef for ProductoExistenciasApi {
    type Response = ProductoExistencias;
    type Request = ProductoExistenciasRequest;
    const PATH: &'static str = "/producto-existencias";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}

#[derive(Clone, Copy, Default)]
pub struct ExistenciasSource;

#[async_trait(?Send)]
impl CrudSource for ExistenciasSource {
    type Entity = ProductoExistencias;
    type Resource = ProductoExistenciasApi;

    async fn load(&self) -> Result<Loaded<ProductoExistencias>, String> {
        let producto_existencias_api = RestResource::<ProductoExistenciasApi>::new();
        let producto_api = RestResource::<ProductoApi>::new();
        let bodega_api = RestResource::<BodegaApi>::new();
        let producto_lote_api = RestResource::<ProductoLoteApi>::new();
        let (existencias, productos, bodegas, lotes) = futures::try_join!(
            producto_existencias_api.find_all(),
            producto_api.find_all(),
            bodega_api.find_all(),
            producto_lote_api.find_all(),
        )?;

        Ok(Loaded::rows(existencias)
            .with_options("productoId", options(&productos, |p| p.id, |p| p.label()))
            .with_options("bodegaId", options(&bodegas, |b| b.id, bodega_label))
            .with_options(
                "productoLoteId",
                options(&lotes, |l| l.id, |l| l.numero_lote.clone()),
            ))
    }
}
