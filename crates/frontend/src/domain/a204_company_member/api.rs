use async_trait::async_trait;
use contracts::domain::a204_company_member::{
    enrich, PersonaEmpresa, PersonaEmpresaDetalle, PersonaEmpresaRequest, ENTITY_METADATA,
};
use contracts::shared::api_error::ErrorMessages;
use leptos::prelude::*;

use crate::domain::a101_employee::api::PersonaApi;
use crate::domain::a201_company::api::EmpresaApi;
use crate::domain::a212_org_unit::api::UnidadOrganizacionalApi;
use crate::shared::crud::{options, scoped_list, CrudSource, Loaded};
use crate::shared::rest::{ResourceDef, RestResource};

pub struct PersonaEmpresaApi;

impl ResourceDef for PersonaEmpresaApi {
    type Response = PersonaEmpresa;
    type Request = PersonaEmpresaRequest;
    const PATH: &'static str = "/empresa/personas-empresa";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}

/// Vínculos persona-empresa con nombres resueltos; lo usan también
/// responsables de bodega, roles, permisos y reportes.
pub async fn load_miembros() -> Result<Vec<PersonaEmpresaDetalle>, String> {
    let persona_empresa_api = RestResource::<PersonaEmpresaApi>::new();
    let persona_api = RestResource::<PersonaApi>::new();
    let empresa_api = RestResource::<EmpresaApi>::new();
    let (vinculos, personas, empresas) = futures::try_join!(
        persona_empresa_api.find_all(),
        persona_api.find_all(),
        empresa_api.find_all(),
    )?;
    Ok(enrich(&vinculos, &personas, &empresas))
}

#[derive(Clone, Copy)]
pub struct PersonaEmpresaSource {
    pub scope: RwSignal<&'static str>,
}

impl PersonaEmpresaSource {
    pub fn new() -> Self {
        Self {
            scope: RwSignal::new(""),
        }
    }
}

#[async_trait(?Send)]
impl CrudSource for PersonaEmpresaSource {
    type Entity = PersonaEmpresaDetalle;
    type Resource = PersonaEmpresaApi;

    async fn load(&self) -> Result<Loaded<PersonaEmpresaDetalle>, String> {
        let persona_api = RestResource::<PersonaApi>::new();
        let empresa_api = RestResource::<EmpresaApi>::new();
        let unidad_organizacional_api = RestResource::<UnidadOrganizacionalApi>::new();
        let (vinculos, personas, empresas, unidades) = futures::try_join!(
            scoped_list::<PersonaEmpresaApi>(self.scope.get_untracked()),
            persona_api.find_all(),
            empresa_api.find_all(),
            unidad_organizacional_api.find_all(),
        )?;

        Ok(Loaded::rows(enrich(&vinculos, &personas, &empresas))
            .with_options(
                "personaId",
                options(&personas, |p| p.id, |p| format!("{} - {}", p.nombre, p.cedula)),
            )
            .with_options("empresaId", options(&empresas, |e| e.id, |e| e.nombre.clone()))
            .with_options(
                "unidadOrganizacionalId",
                options(&unidades, |u| u.id, |u| u.nombre.clone()),
            ))
    }
}
