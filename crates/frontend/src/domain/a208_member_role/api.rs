use async_trait::async_trait;
use contracts::domain::a208_member_role::{
    enrich, PersonaEmpresaRol, PersonaEmpresaRolDetalle, PersonaEmpresaRolRequest, ENTITY_METADATA,
};
use contracts::shared::api_error::ErrorMessages;
use leptos::prelude::*;

use crate::domain::a204_company_member::api::load_miembros;
use crate::domain::a207_company_role::api::load_roles;
use crate::shared::api_utils::ApiBase;
use crate::shared::crud::{options, scoped_list, CrudSource, Loaded};
use crate::shared::rest::ResourceDef;

pub struct PersonaEmpresaRolApi;

impl ResourceDef for PersonaEmpresaRolApi {
    type Response = PersonaEmpresaRol;
    type Request = PersonaEmpresaRolRequest;
    const PATH: &'static str = "/empresa/personas-empresa-roles";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
    const BASE: ApiBase = ApiBase::Public;
}

/// Sub-ruta del listado según el filtro elegido
pub fn scope_path(activos: bool, persona_empresa_id: Option<i64>, rol_id: Option<i64>) -> String {
    match (persona_empresa_id, rol_id) {
        (Some(id), _) => format!("/persona-empresa/{}", id),
        (None, Some(id)) => format!("/rol/{}", id),
        (None, None) if activos => "/activos".to_string(),
        (None, None) => String::new(),
    }
}

#[derive(Clone, Copy)]
pub struct PersonaEmpresaRolSource {
    pub activos: RwSignal<bool>,
    pub persona_empresa_id: RwSignal<Option<i64>>,
    pub rol_id: RwSignal<Option<i64>>,
}

impl PersonaEmpresaRolSource {
    pub fn new() -> Self {
        Self {
            activos: RwSignal::new(false),
            persona_empresa_id: RwSignal::new(None),
            rol_id: RwSignal::new(None),
        }
    }
}

#[async_trait(?Send)]
impl CrudSource for PersonaEmpresaRolSource {
    type Entity = PersonaEmpresaRolDetalle;
    type Resource = PersonaEmpresaRolApi;

    async fn load(&self) -> Result<Loaded<PersonaEmpresaRolDetalle>, String> {
        let path = scope_path(
            self.activos.get_untracked(),
            self.persona_empresa_id.get_untracked(),
            self.rol_id.get_untracked(),
        );
        let (asignaciones, miembros, roles) = futures::try_join!(
            scoped_list::<PersonaEmpresaRolApi>(&path),
            load_miembros(),
            load_roles(),
        )?;
        let roles_base: Vec<_> = roles.iter().map(|r| r.base.clone()).collect();

        Ok(Loaded::rows(enrich(&asignaciones, &miembros, &roles_base))
            .with_options(
                "personaEmpresaId",
                options(&miembros, |m| m.base.id, |m| m.label()),
            )
            .with_options("rolEmpresaId", options(&roles, |r| r.base.id, |r| r.label())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_path() {
        assert_eq!(scope_path(false, None, None), "");
        assert_eq!(scope_path(true, None, None), "/activos");
        assert_eq!(scope_path(true, Some(4), None), "/persona-empresa/4");
        assert_eq!(scope_path(false, None, Some(9)), "/rol/9");
    }
}
