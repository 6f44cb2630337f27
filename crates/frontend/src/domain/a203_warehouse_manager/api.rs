use async_trait::async_trait;
use contracts::domain::a203_warehouse_manager::{
    enrich, BodegaResponsable, BodegaResponsableDetalle, BodegaResponsableRequest, ENTITY_METADATA,
};
use contracts::shared::api_error::ErrorMessages;
use leptos::prelude::*;

use crate::domain::a202_warehouse::api::{bodega_label, BodegaApi};
use crate::domain::a204_company_member::api::load_miembros;
use crate::shared::crud::{options, scoped_list, CrudSource, Loaded};
use crate::shared::rest::{ResourceDef, RestResource};

pub struct BodegaResponsableApi;

impl ResourceDef for BodegaResponsableApi {
    type Response = BodegaResponsable;
    type Request = BodegaResponsableRequest;
    const PATH: &'static str = "/empresa/bodegas-responsables";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}

/// `scope`: `""`, `/activos` o `/bodega/{id}`
#[derive(Clone, Copy)]
pub struct BodegaResponsableSource {
    pub scope: RwSignal<String>,
}

impl BodegaResponsableSource {
    pub fn new() -> Self {
        Self {
            scope: RwSignal::new(String::new()),
        }
    }
}

#[async_trait(?Send)]
impl CrudSource for BodegaResponsableSource {
    type Entity = BodegaResponsableDetalle;
    type Resource = BodegaResponsableApi;

    async fn load(&self) -> Result<Loaded<BodegaResponsableDetalle>, String> {
        let scope = self.scope.get_untracked();
        let bodega_api = RestResource::<BodegaApi>::new();
        let (asignaciones, bodegas, miembros) = futures::try_join!(
            scoped_list::<BodegaResponsableApi>(&scope),
            bodega_api.find_all(),
            load_miembros(),
        )?;

        Ok(Loaded::rows(enrich(&asignaciones, &bodegas, &miembros))
            .with_options("bodegaId", options(&bodegas, |b| b.id, bodega_label))
            .with_options(
                "personaEmpresaId",
                options(&miembros, |m| m.base.id, |m| m.label()),
            ))
    }
}
