use contracts::domain::a308_valuation_method::MetodoValuacion;
use leptos::prelude::*;

use crate::domain::a308_valuation_method::api::MetodoValuacionApi;
use crate::shared::crud::{Column, CrudPage, PageController, RestSource};

#[component]
#[allow(non_snake_case)]
pub fn MetodoValuacionList() -> impl IntoView {
    let ctrl = PageController::mount(RestSource::<MetodoValuacionApi>::new());

    CrudPage::new(ctrl)
        .column(Column::text("Nombre", |c: &MetodoValuacion| c.nombre.clone()).min_width(180.0))
        .column(Column::text("Descripción", |c: &MetodoValuacion| c.descripcion.clone()).min_width(240.0))
        .column(Column::flag("Estado", |c: &MetodoValuacion| c.activo))
        .view()
}
