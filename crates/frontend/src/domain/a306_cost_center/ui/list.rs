use contracts::domain::a306_cost_center::CentroCostos;
use leptos::prelude::*;

use crate::domain::a306_cost_center::api::CentroCostosApi;
use crate::shared::crud::{Column, CrudPage, PageController, RestSource};

#[component]
#[allow(non_snake_case)]
pub fn CentroCostosList() -> impl IntoView {
    let ctrl = PageController::mount(RestSource::<CentroCostosApi>::new());

    CrudPage::new(ctrl)
        .column(Column::text("Nombre", |c: &CentroCostos| c.nombre.clone()).min_width(180.0))
        .column(Column::text("Descripción", |c: &CentroCostos| c.descripcion.clone()).min_width(240.0))
        .column(Column::flag("Estado", |c: &CentroCostos| c.activo))
        .view()
}
