use async_trait::async_trait;
use contracts::domain::a406_product_price::{
    enrich, PrecioProducto, PrecioProductoDetalle, PrecioProductoRequest, ENTITY_METADATA,
};
use contracts::shared::api_error::ErrorMessages;
use leptos::prelude::*;

use crate::domain::a311_product::api::ProductoApi;
use crate::domain::a405_price_list::api::ListaPreciosApi;
use crate::shared::crud::{list_by, options, CrudSource, Loaded};
use crate::shared::rest::{ResourceDef, RestResource};

pub struct PrecioProductoApi;

impl ResourceDef for PrecioProductoApi {
    type Response = PrecioProducto;
    type Request = PrecioProductoRequest;
    const PATH: &'static str = "/ventas/precios-producto";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}

/// Prefijo e id del listado filtrado
pub fn price_filter(lista_id: Option<i64>, producto_id: Option<i64>) -> (&'static str, Option<i64>) {
    match (lista_id, producto_id) {
        (Some(id), _) => ("/lista", Some(id)),
        (None, id) => ("/producto", id),
    }
}

/// Precios de una lista (`/lista/{id}`) o de un producto (`/producto/{id}`).
/// Con ambos filtros manda la lista.
#[derive(Clone, Copy)]
pub struct PrecioProductoSource {
    pub lista_id: RwSignal<Option<i64>>,
    pub producto_id: RwSignal<Option<i64>>,
}

impl PrecioProductoSource {
    pub fn new() -> Self {
        Self {
            lista_id: RwSignal::new(None),
            producto_id: RwSignal::new(None),
        }
    }

    async fn precios(&self) -> Result<Vec<PrecioProducto>, String> {
        let (prefix, id) = price_filter(self.lista_id.get_untracked(), self.producto_id.get_untracked());
        list_by::<PrecioProductoApi>(prefix, id).await
    }
}

#[async_trait(?Send)]
impl CrudSource for PrecioProductoSource {
    type Entity = PrecioProductoDetalle;
    type Resource = PrecioProductoApi;

    async fn load(&self) -> Result<Loaded<PrecioProductoDetalle>, String> {
        let lista_precios_api = RestResource::<ListaPreciosApi>::new();
        let producto_api = RestResource::<ProductoApi>::new();
        let (precios, listas, productos) = futures::try_join!(
            self.precios(),
            lista_precios_api.find_all(),
            producto_api.find_all(),
        )?;

        Ok(Loaded::rows(enrich(&precios, &productos))
            .with_options(
                "listaPreciosId",
                options(&listas, |l| l.id, |l| format!("{} - {}", l.codigo, l.nombre)),
            )
            .with_options("productoId", options(&productos, |p| p.id, |p| p.label())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_filter() {
        assert_eq!(price_filter(Some(3), Some(9)), ("/lista", Some(3)));
        assert_eq!(price_filter(None, Some(9)), ("/producto", Some(9)));
        // sin filtros: list_by cae en find_all
        assert_eq!(price_filter(None, None).1, None);
    }
}
