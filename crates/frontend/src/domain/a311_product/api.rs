use async_trait::async_trait;
use contracts::domain::a311_product::{Producto, ProductoRequest, ENTITY_METADATA};
use contracts::shared::api_error::ErrorMessages;

use crate::domain::a304_subgroup::api::SubgrupoApi;
use crate::domain::a305_business_line::api::LineaNegocioApi;
use crate::domain::a309_product_type::api::ProductoTipoApi;
use crate::shared::crud::{options, CrudSource, Loaded};
use crate::shared::rest::{ResourceDef, RestResource};

pub struct ProductoApi;

impl ResourceDef for ProductoApi {
    type Response = Producto;
    type Request = ProductoRequest;
    const PATH: &'static str = "/producto";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}

pub async fn find_by_sku(sku: String) -> Result<Producto, String> {
    RestResource::<ProductoApi>::new()
        .get_one(&format!("/sku/{}", urlencoding::encode(&sku)))
        .await
}

#[derive(Clone, Copy, Default)]
pub struct ProductoSource;

#[async_trait(?Send)]
impl CrudSource for ProductoSource {
    type Entity = Producto;
    type Resource = ProductoApi;

    async fn load(&self) -> Result<Loaded<Producto>, String> {
        let producto_api = RestResource::<ProductoApi>::new();
        let linea_negocio_api = RestResource::<LineaNegocioApi>::new();
        let subgrupo_api = RestResource::<SubgrupoApi>::new();
        let producto_tipo_api = RestResource::<ProductoTipoApi>::new();
        let (productos, lineas, subgrupos, tipos) = futures::try_join!(
            producto_api.find_all(),
            linea_negocio_api.find_all(),
            subgrupo_api.find_all(),
            producto_tipo_api.find_all(),
        )?;

        Ok(Loaded::rows(productos)
            .with_options(
                "lineaNegocioId",
                options(&lineas, |l| l.id, |l| l.nombre_linea.clone()),
            )
            .with_options("subgrupoId", options(&subgrupos, |s| s.id, |s| s.nombre.clone()))
            .with_options("productoTipoId", options(&tipos, |t| t.id, |t| t.nombre.clone())))
    }
}
