use async_trait::async_trait;
use contracts::domain::a202_warehouse::{Bodega, BodegaRequest, ENTITY_METADATA};
use contracts::shared::api_error::ErrorMessages;

use crate::domain::a201_company::api::EmpresaApi;
use crate::domain::a212_org_unit::api::UnidadOrganizacionalApi;
use crate::shared::crud::{options, CrudSource, Loaded};
use crate::shared::rest::{ResourceDef, RestResource};

pub struct BodegaApi;

impl ResourceDef for BodegaApi {
    type Response = Bodega;
    type Request = BodegaRequest;
    const PATH: &'static str = "/bodega";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}

pub async fn find_by_codigo(codigo: String) -> Result<Bodega, String> {
    RestResource::<BodegaApi>::new()
        .get_one(&format!("/codigo/{}", urlencoding::encode(&codigo)))
        .await
}

/// `codigo - nombre`, como aparece en los selects
pub fn bodega_label(b: &Bodega) -> String {
    format!("{} - {}", b.codigo, b.nombre)
}

#[derive(Clone, Copy, Default)]
pub struct BodegaSource;

#[async_trait(?Send)]
impl CrudSource for BodegaSource {
    type Entity = Bodega;
    type Resource = BodegaApi;

    async fn load(&self) -> Result<Loaded<Bodega>, String> {
        let bodega_api = RestResource::<BodegaApi>::new();
        let empresa_api = RestResource::<EmpresaApi>::new();
        let unidad_organizacional_api = RestResource::<UnidadOrganizacionalApi>::new();
        let (bodegas, empresas, unidades) = futures::try_join!(
            bodega_api.find_all(),
            empresa_api.find_all(),
            unidad_organizacional_api.find_all(),
        )?;

        Ok(Loaded::rows(bodegas)
            .with_options("empresaId", options(&empresas, |e| e.id, |e| e.nombre.clone()))
            .with_options(
                "unidadOrganizacionalId",
                options(&unidades, |u| u.id, |u| u.nombre.clone()),
            ))
    }
}
