use contracts::domain::a309_product_type::ProductoTipo;
use leptos::prelude::*;

use crate::domain::a309_product_type::api::ProductoTipoApi;
use crate::shared::crud::{Column, CrudPage, PageController, RestSource};

#[component]
#[allow(non_snake_case)]
pub fn ProductoTipoList() -> impl IntoView {
    let ctrl = PageController::mount(RestSource::<ProductoTipoApi>::new());

    CrudPage::new(ctrl)
        .column(Column::text("ID", |c: &ProductoTipo| c.id.to_string()).min_width(60.0))
        .column(Column::text("Nombre", |c: &ProductoTipo| c.nombre.clone()).min_width(240.0))
        .column(Column::flag("Estado", |c: &ProductoTipo| c.activo))
        .view()
}
