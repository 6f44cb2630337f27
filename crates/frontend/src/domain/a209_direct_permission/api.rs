use async_trait::async_trait;
use contracts::domain::a209_direct_permission::{
    enrich, PermisoDirectoPersonal, PermisoDirectoPersonalDetalle, PermisoDirectoPersonalRequest,
    ENTITY_METADATA,
};
use contracts::shared::api_error::ErrorMessages;
use leptos::prelude::*;

use crate::domain::a204_company_member::api::load_miembros;
use crate::domain::a206_process_action::api::load_acciones;
use crate::shared::api_utils::ApiBase;
use crate::shared::crud::{options, scoped_list, CrudSource, Loaded};
use crate::shared::rest::ResourceDef;

pub struct PermisoDirectoApi;

impl ResourceDef for PermisoDirectoApi {
    type Response = PermisoDirectoPersonal;
    type Request = PermisoDirectoPersonalRequest;
    const PATH: &'static str = "/empresa/permisos-directos";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
    const BASE: ApiBase = ApiBase::Public;
}

#[derive(Clone, Copy)]
pub struct PermisoDirectoSource {
    pub persona_empresa_id: RwSignal<Option<i64>>,
    pub accion_proceso_id: RwSignal<Option<i64>>,
}

impl PermisoDirectoSource {
    pub fn new() -> Self {
        Self {
            persona_empresa_id: RwSignal::new(None),
            accion_proceso_id: RwSignal::new(None),
        }
    }

    fn scope(&self) -> String {
        match (
            self.persona_empresa_id.get_untracked(),
            self.accion_proceso_id.get_untracked(),
        ) {
            (Some(id), _) => format!("/persona-empresa/{}", id),
            (None, Some(id)) => format!("/accion-proceso/{}", id),
            (None, None) => String::new(),
        }
    }
}

#[async_trait(?Send)]
impl CrudSource for PermisoDirectoSource {
    type Entity = PermisoDirectoPersonalDetalle;
    type Resource = PermisoDirectoApi;

    async fn load(&self) -> Result<Loaded<PermisoDirectoPersonalDetalle>, String> {
        let scope = self.scope();
        let (permisos, miembros, acciones) = futures::try_join!(
            scoped_list::<PermisoDirectoApi>(&scope),
            load_miembros(),
            load_acciones(),
        )?;

        Ok(Loaded::rows(enrich(&permisos, &miembros, &acciones))
            .with_options(
                "personaEmpresaId",
                options(&miembros, |m| m.base.id, |m| m.label()),
            )
            .with_options(
                "accionProcesoId",
                options(&acciones, |a| a.base.id, |a| a.label()),
            ))
    }
}
