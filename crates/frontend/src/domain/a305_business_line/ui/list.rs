use contracts::domain::a305_business_line::LineaNegocio;
use leptos::prelude::*;

use crate::domain::a305_business_line::api::LineaNegocioApi;
use crate::shared::crud::{Column, CrudPage, PageController, RestSource};

#[component]
#[allow(non_snake_case)]
pub fn LineaNegocioList() -> impl IntoView {
    let ctrl = PageController::mount(RestSource::<LineaNegocioApi>::new());

    CrudPage::new(ctrl)
        .column(Column::text("Código", |c: &LineaNegocio| c.codigo_linea.clone()))
        .column(Column::text("Nombre", |c: &LineaNegocio| c.nombre_linea.clone()).min_width(200.0))
        .column(Column::flag("Estado", |c: &LineaNegocio| c.activo))
        .view()
}
