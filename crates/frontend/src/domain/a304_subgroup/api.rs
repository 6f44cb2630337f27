use async_trait::async_trait;
use contracts::domain::a304_subgroup::{Subgrupo, SubgrupoRequest, ENTITY_METADATA};
use contracts::shared::api_error::ErrorMessages;

use crate::domain::a303_group::api::GrupoApi;
use crate::shared::crud::{options, CrudSource, Loaded};
use crate::shared::rest::{ResourceDef, RestResource};

pub struct SubgrupoApi;

impl ResourceDef for SubgrupoApi {
    type Response = Subgrupo;
    type Request = SubgrupoRequest;
    const PATH: &'static str = "/subgrupo";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}

#[derive(Clone, Copy, Default)]
pub struct SubgrupoSource;

#[async_trait(?Send)]
impl CrudSource for SubgrupoSource {
    type Entity = Subgrupo;
    type Resource = SubgrupoApi;

    async fn load(&self) -> Result<Loaded<Subgrupo>, String> {
        let subgrupo_api = RestResource::<SubgrupoApi>::new();
        let grupo_api = RestResource::<GrupoApi>::new();
        let (subgrupos, grupos) = futures::try_join!(
            subgrupo_api.find_all(),
            grupo_api.find_all(),
        )?;
        Ok(Loaded::rows(subgrupos).with_options(
            "grupoId",
            options(&grupos, |g| g.id, |g| format!("{} - {}", g.codigo, g.nombre)),
        ))
    }
}
