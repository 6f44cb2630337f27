use async_trait::async_trait;
use contracts::domain::a212_org_unit::{
    enrich, UnidadOrganizacional, UnidadOrganizacionalDetalle, UnidadOrganizacionalRequest,
    ENTITY_METADATA,
};
use contracts::shared::api_error::ErrorMessages;

use crate::domain::a201_company::api::EmpresaApi;
use crate::shared::crud::{options, CrudSource, Loaded};
use crate::shared::rest::{ResourceDef, RestResource};

pub struct UnidadOrganizacionalApi;

impl ResourceDef for UnidadOrganizacionalApi {
    type Response = UnidadOrganizacional;
    type Request = UnidadOrganizacionalRequest;
    const PATH: &'static str = "/unidad-organizacional";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}

#[derive(Clone, Copy, Default)]
pub struct UnidadOrganizacionalSource;

#[async_trait(?Send)]
impl CrudSource for UnidadOrganizacionalSource {
    type Entity = UnidadOrganizacionalDetalle;
    type Resource = UnidadOrganizacionalApi;

    async fn load(&self) -> Result<Loaded<UnidadOrganizacionalDetalle>, String> {
        let unidad_organizacional_api = RestResource::<UnidadOrganizacionalApi>::new();
        let empresa_api = RestResource::<EmpresaApi>::new();
        let (unidades, empresas) = futures::try_join!(
            unidad_organizacional_api.find_all(),
            empresa_api.find_all(),
        )?;

        Ok(Loaded::rows(enrich(&unidades, &empresas))
            .with_options("empresaId", options(&empresas, |e| e.id, |e| e.nombre.clone()))
            .with_options(
                "unidadPadreId",
                options(&unidades, |u| u.id, |u| format!("{} ({})", u.nombre, u.tipo)),
            ))
    }
}
