use async_trait::async_trait;
use contracts::domain::a316_movement_line::{
    DetalleMovimiento, DetalleMovimientoRequest, ENTITY_METADATA,
};
use contracts::shared::api_error::ErrorMessages;
use leptos::prelude::*;

use crate::domain::a315_inventory_movement::api::MovimientoApi;
use crate::shared::crud::{list_by, options, CrudSource, Loaded};
use crate::shared::rest::{ResourceDef, RestResource};

pub struct DetalleMovimientoApi;

impl ResourceDef for DetalleMovimientoApi {
    type Response = DetalleMovimiento;
    type Request = DetalleMovimientoRequest;
    const PATH: &'static str = "/detalle-movimiento-inventario";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}

/// Clave de opciones del filtro por movimiento
pub const MOVIMIENTO_FILTER: &str = "movimientoId";

#[derive(Clone, Copy)]
pub struct DetalleMovimientoSource {
    pub movimiento_id: RwSignal<Option<i64>>,
}

impl DetalleMovimientoSource {
    pub fn new() -> Self {
        Self {
            movimiento_id: RwSignal::new(None),
        }
    }
}

#[async_trait(?Send)]
impl CrudSource for DetalleMovimientoSource {
    type Entity = DetalleMovimiento;
    type Resource = DetalleMovimientoApi;

    async fn load(&self) -> Result<Loaded<DetalleMovimiento>, String> {
        let movimiento_api = RestResource::<MovimientoApi>::new();
        let (detalles, movimientos) = futures::try_join!(
            list_by::<DetalleMovimientoApi>("/movimiento", self.movimiento_id.get_untracked()),
            movimiento_api.find_all(),
        )?;
        Ok(Loaded::rows(detalles).with_options(
            MOVIMIENTO_FILTER,
            options(&movimientos, |m| m.id, |m| {
                format!("{} ({})", m.numero_movimiento, m.tipo_movimiento_nombre)
            }),
        ))
    }
}
