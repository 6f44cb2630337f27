use async_trait::async_trait;
use contracts::domain::a311_product::Producto;
use contracts::domain::a315_inventory_movement::{
    MovementAction, MovimientoInventario, MovimientoInventarioRequest, ENTITY_METADATA,
};
use contracts::shared::api_error::ErrorMessages;
use leptos::prelude::*;

use crate::domain::a202_warehouse::api::{bodega_label, BodegaApi};
use crate::domain::a310_product_lot::api::ProductoLoteApi;
use crate::domain::a311_product::api::ProductoApi;
use crate::domain::a314_movement_type::api::TipoMovimientoApi;
use crate::shared::crud::{options, CrudSource, Loaded};
use crate::shared::rest::{ResourceDef, RestResource};

pub struct MovimientoApi;

impl ResourceDef for MovimientoApi {
    type Response = MovimientoInventario;
    type Request = MovimientoInventarioRequest;
    const PATH: &'static str = "/movimiento-inventario";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}

/// `PUT /{id}/confirmar|contabilizar|anular`
pub async fn transition(id: i64, action: MovementAction) -> Result<(), String> {
    RestResource::<MovimientoApi>::new()
        .put_action(id, action.path())
        .await
}

/// Movimientos más los catálogos del formulario. Los productos quedan a
/// mano para nombrar las líneas.
#[derive(Clone, Copy)]
pub struct MovimientoSource {
    pub productos: RwSignal<Vec<Producto>>,
}

impl MovimientoSource {
    pub fn new() -> Self {
        Self {
            productos: RwSignal::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl CrudSource for MovimientoSource {
    type Entity = MovimientoInventario;
    type Resource = MovimientoApi;

    async fn load(&self) -> Result<Loaded<MovimientoInventario>, String> {
        let movimiento_api = RestResource::<MovimientoApi>::new();
        let tipo_movimiento_api = RestResource::<TipoMovimientoApi>::new();
        let bodega_api = RestResource::<BodegaApi>::new();
        let producto_api = RestResource::<ProductoApi>::new();
        let producto_lote_api = RestResource::<ProductoLoteApi>::new();
        let (movimientos, tipos, bodegas, productos, lotes) = futures::try_join!(
            movimiento_api.find_all(),
            tipo_movimiento_api.find_all(),
            bodega_api.find_all(),
            producto_api.find_all(),
            producto_lote_api.find_all(),
        )?;

        let bodega_options = options(&bodegas, |b| b.id, bodega_label);
        let loaded = Loaded::rows(movimientos)
            .with_options(
                "tipoMovimientoId",
                options(&tipos, |t| t.id, |t| format!("{} - {}", t.codigo, t.nombre)),
            )
            .with_options("bodegaOrigenId", bodega_options.clone())
            .with_options("bodegaDestinoId", bodega_options)
            .with_options("productoId", options(&productos, |p| p.id, |p| p.label()))
            .with_options("loteId", options(&lotes, |l| l.id, |l| l.numero_lote.clone()));

        self.productos.set(productos);
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::api_url;
    use crate::shared::rest::{action_path, empty_body};

    #[test]
    fn test_transition_request() {
        let url = |action: MovementAction| {
            let path = format!("{}{}", MovimientoApi::PATH, action_path(12, action.path()));
            api_url("http://erp:8080/api", &path)
        };
        assert_eq!(
            url(MovementAction::Confirmar),
            "http://erp:8080/api/movimiento-inventario/12/confirmar"
        );
        assert_eq!(
            url(MovementAction::Contabilizar),
            "http://erp:8080/api/movimiento-inventario/12/contabilizar"
        );
        assert_eq!(
            url(MovementAction::Anular),
            "http://erp:8080/api/movimiento-inventario/12/anular"
        );
        assert_eq!(serde_json::to_string(&empty_body()).unwrap(), "{}");
    }
}
