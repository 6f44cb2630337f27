use async_trait::async_trait;
use contracts::domain::a211_reporting_line::{
    enrich, ReporteJerarquico, ReporteJerarquicoRequest, ENTITY_METADATA,
};
use contracts::shared::api_error::ErrorMessages;
use leptos::prelude::*;

use crate::domain::a204_company_member::api::load_miembros;
use crate::shared::api_utils::ApiBase;
use crate::shared::crud::{options, scoped_list, CrudSource, Loaded};
use crate::shared::rest::ResourceDef;

pub struct ReporteJerarquicoApi;

impl ResourceDef for ReporteJerarquicoApi {
    type Response = ReporteJerarquico;
    type Request = ReporteJerarquicoRequest;
    const PATH: &'static str = "/empresa/reportes-jerarquicos";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
    const BASE: ApiBase = ApiBase::Public;
}

/// Filtro del listado: por jefe, por subordinado o solo activos
#[derive(Clone, Copy)]
pub struct ReporteJerarquicoSource {
    pub activos: RwSignal<bool>,
    pub jefe_id: RwSignal<Option<i64>>,
    pub subordinado_id: RwSignal<Option<i64>>,
}

impl ReporteJerarquicoSource {
    pub fn new() -> Self {
        Self {
            activos: RwSignal::new(false),
            jefe_id: RwSignal::new(None),
            subordinado_id: RwSignal::new(None),
        }
    }

    fn scope(&self) -> String {
        if let Some(id) = self.jefe_id.get_untracked() {
            format!("/jefe/{}", id)
        } else if let Some(id) = self.subordinado_id.get_untracked() {
            format!("/subordinado/{}", id)
        } else if self.activos.get_untracked() {
            "/activos".to_string()
        } else {
            String::new()
        }
    }
}

#[async_trait(?Send)]
impl CrudSource for ReporteJerarquicoSource {
    type Entity = ReporteJerarquico;
    type Resource = ReporteJerarquicoApi;

    async fn load(&self) -> Result<Loaded<ReporteJerarquico>, String> {
        let scope = self.scope();
        let (reportes, miembros) =
            futures::try_join!(scoped_list::<ReporteJerarquicoApi>(&scope), load_miembros())?;
        let personas = options(&miembros, |m| m.base.id, |m| m.label());

        Ok(Loaded::rows(enrich(reportes, &miembros))
            .with_options("subordinadoId", personas.clone())
            .with_options("jefeId", personas))
    }
}
