use async_trait::async_trait;
use contracts::domain::a302_subcategory::{Subcategoria, SubcategoriaRequest, ENTITY_METADATA};
use contracts::shared::api_error::ErrorMessages;

use crate::domain::a301_category::api::CategoriaApi;
use crate::shared::crud::{options, CrudSource, Loaded};
use crate::shared::rest::{ResourceDef, RestResource};

pub struct SubcategoriaApi;

impl ResourceDef for SubcategoriaApi {
    type Response = Subcategoria;
    type Request = SubcategoriaRequest;
    const PATH: &'static str = "/subcategoria";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}

#[derive(Clone, Copy, Default)]
pub struct SubcategoriaSource;

#[async_trait(?Send)]
impl CrudSource for SubcategoriaSource {
    type Entity = Subcategoria;
    type Resource = SubcategoriaApi;

    async fn load(&self) -> Result<Loaded<Subcategoria>, String> {
        let subcategoria_api = RestResource::<SubcategoriaApi>::new();
        let categoria_api = RestResource::<CategoriaApi>::new();
        let (subcategorias, categorias) = futures::try_join!(
            subcategoria_api.find_all(),
            categoria_api.find_all(),
        )?;
        Ok(Loaded::rows(subcategorias).with_options(
            "categoriaId",
            options(&categorias, |c| c.id, |c| format!("{} - {}", c.codigo, c.nombre)),
        ))
    }
}
