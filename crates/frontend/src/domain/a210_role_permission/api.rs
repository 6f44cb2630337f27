use async_trait::async_trait;
use contracts::domain::a210_role_permission::{
    enrich, RolProcesoPermiso, RolProcesoPermisoDetalle, RolProcesoPermisoRequest, ENTITY_METADATA,
};
use contracts::shared::api_error::ErrorMessages;
use leptos::prelude::*;

use crate::domain::a206_process_action::api::load_acciones;
use crate::domain::a207_company_role::api::load_roles;
use crate::shared::api_utils::ApiBase;
use crate::shared::crud::{list_by, options, CrudSource, Loaded};
use crate::shared::rest::ResourceDef;

pub struct RolProcesoPermisoApi;

impl ResourceDef for RolProcesoPermisoApi {
    type Response = RolProcesoPermiso;
    type Request = RolProcesoPermisoRequest;
    const PATH: &'static str = "/empresa/roles-procesos-permisos";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
    const BASE: ApiBase = ApiBase::Public;
}

#[derive(Clone, Copy)]
pub struct RolProcesoPermisoSource {
    pub rol_empresa_id: RwSignal<Option<i64>>,
}

impl RolProcesoPermisoSource {
    pub fn new() -> Self {
        Self {
            rol_empresa_id: RwSignal::new(None),
        }
    }
}

#[async_trait(?Send)]
impl CrudSource for RolProcesoPermisoSource {
    type Entity = RolProcesoPermisoDetalle;
    type Resource = RolProcesoPermisoApi;

    async fn load(&self) -> Result<Loaded<RolProcesoPermisoDetalle>, String> {
        let (permisos, roles, acciones) = futures::try_join!(
            list_by::<RolProcesoPermisoApi>("/rol-empresa", self.rol_empresa_id.get_untracked()),
            load_roles(),
            load_acciones(),
        )?;

        Ok(Loaded::rows(enrich(&permisos, &roles, &acciones))
            .with_options("rolEmpresaId", options(&roles, |r| r.base.id, |r| r.label()))
            .with_options(
                "accionProcesoId",
                options(&acciones, |a| a.base.id, |a| a.label()),
            ))
    }
}
