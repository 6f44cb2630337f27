use async_trait::async_trait;
use contracts::domain::a206_process_action::{
    enrich, AccionProceso, AccionProcesoDetalle, AccionProcesoRequest, ENTITY_METADATA,
};
use contracts::shared::api_error::ErrorMessages;
use leptos::prelude::*;

use crate::domain::a205_process::api::ProcesoApi;
use crate::shared::api_utils::ApiBase;
use crate::shared::crud::{list_by, options, CrudSource, Loaded};
use crate::shared::rest::{ResourceDef, RestResource};

pub struct AccionProcesoApi;

impl ResourceDef for AccionProcesoApi {
    type Response = AccionProceso;
    type Request = AccionProcesoRequest;
    const PATH: &'static str = "/empresa/acciones-proceso";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
    const BASE: ApiBase = ApiBase::Public;
}

/// Acciones con su proceso; también para permisos
pub async fn load_acciones() -> Result<Vec<AccionProcesoDetalle>, String> {
    let accion_proceso_api = RestResource::<AccionProcesoApi>::new();
    let proceso_api = RestResource::<ProcesoApi>::new();
    let (acciones, procesos) = futures::try_join!(
        accion_proceso_api.find_all(),
        proceso_api.find_all(),
    )?;
    Ok(enrich(&acciones, &procesos))
}

/// Solo las acciones de un proceso (`/proceso/{id}`) o todas
#[derive(Clone, Copy)]
pub struct AccionProcesoSource {
    pub proceso_id: RwSignal<Option<i64>>,
}

impl AccionProcesoSource {
    pub fn new() -> Self {
        Self {
            proceso_id: RwSignal::new(None),
        }
    }
}

#[async_trait(?Send)]
impl CrudSource for AccionProcesoSource {
    type Entity = AccionProcesoDetalle;
    type Resource = AccionProcesoApi;

    async fn load(&self) -> Result<Loaded<AccionProcesoDetalle>, String> {
        let proceso_api = RestResource::<ProcesoApi>::new();
        let (acciones, procesos) = futures::try_join!(
            list_by::<AccionProcesoApi>("/proceso", self.proceso_id.get_untracked()),
            proceso_api.find_all(),
        )?;

        Ok(Loaded::rows(enrich(&acciones, &procesos))
            .with_options("procesoId", options(&procesos, |p| p.id, |p| p.label())))
    }
}
