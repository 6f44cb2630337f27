use contracts::domain::a303_group::Grupo;
use leptos::prelude::*;

use crate::domain::a303_group::api::GrupoApi;
use crate::shared::crud::{Column, CrudPage, PageController, RestSource};

#[component]
#[allow(non_snake_case)]
pub fn GrupoList() -> impl IntoView {
    let ctrl = PageController::mount(RestSource::<GrupoApi>::new());

    CrudPage::new(ctrl)
        .column(Column::text("Código", |c: &Grupo| c.codigo.clone()))
        .column(Column::text("Nombre", |c: &Grupo| c.nombre.clone()).min_width(200.0))
        .column(Column::flag("Estado", |c: &Grupo| c.activo))
        .view()
}
