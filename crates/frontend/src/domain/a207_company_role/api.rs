use async_trait::async_trait;
use contracts::domain::a207_company_role::{
    enrich, RolEmpresa, RolEmpresaDetalle, RolEmpresaRequest, ENTITY_METADATA,
};
use contracts::shared::api_error::ErrorMessages;
use leptos::prelude::*;

use crate::domain::a201_company::api::EmpresaApi;
use crate::shared::api_utils::ApiBase;
use crate::shared::crud::{list_by, options, CrudSource, Loaded};
use crate::shared::rest::{ResourceDef, RestResource};

pub struct RolEmpresaApi;

impl ResourceDef for RolEmpresaApi {
    type Response = RolEmpresa;
    type Request = RolEmpresaRequest;
    const PATH: &'static str = "/empresa/roles";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
    const BASE: ApiBase = ApiBase::Public;
}

pub async fn load_roles() -> Result<Vec<RolEmpresaDetalle>, String> {
    let rol_empresa_api = RestResource::<RolEmpresaApi>::new();
    let empresa_api = RestResource::<EmpresaApi>::new();
    let (roles, empresas) = futures::try_join!(
        rol_empresa_api.find_all(),
        empresa_api.find_all(),
    )?;
    Ok(enrich(&roles, &empresas))
}

#[derive(Clone, Copy)]
pub struct RolEmpresaSource {
    pub empresa_id: RwSignal<Option<i64>>,
}

impl RolEmpresaSource {
    pub fn new() -> Self {
        Self {
            empresa_id: RwSignal::new(None),
        }
    }
}

#[async_trait(?Send)]
impl CrudSource for RolEmpresaSource {
    type Entity = RolEmpresaDetalle;
    type Resource = RolEmpresaApi;

    async fn load(&self) -> Result<Loaded<RolEmpresaDetalle>, String> {
        let rol_empresa_api = RestResource::<RolEmpresaApi>::new();
        let empresa_api = RestResource::<EmpresaApi>::new();
        let (roles, todos, empresas) = futures::try_join!(
            list_by::<RolEmpresaApi>("/empresa", self.empresa_id.get_untracked()),
            rol_empresa_api.find_all(),
            empresa_api.find_all(),
        )?;

        // el rol padre se resuelve contra todos los roles, no solo los filtrados
        let padres = enrich(&todos, &empresas);
        let mut rows = enrich(&roles, &empresas);
        for row in rows.iter_mut() {
            if let Some(padre) = row
                .base
                .rol_padre_id
                .and_then(|id| padres.iter().find(|p| p.base.id == id))
            {
                row.rol_padre_nombre = padre.base.nombre.clone();
            }
        }

        Ok(Loaded::rows(rows)
            .with_options("empresaId", options(&empresas, |e| e.id, |e| e.nombre.clone()))
            .with_options("rolPadreId", options(&padres, |r| r.base.id, |r| r.label())))
    }
}
