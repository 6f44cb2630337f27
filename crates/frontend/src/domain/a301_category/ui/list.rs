use contracts::domain::a301_category::Categoria;
use leptos::prelude::*;

use crate::domain::a301_category::api::CategoriaApi;
use crate::shared::crud::{Column, CrudPage, PageController, RestSource};

#[component]
#[allow(non_snake_case)]
pub fn CategoriaList() -> impl IntoView {
    let ctrl = PageController::mount(RestSource::<CategoriaApi>::new());

    CrudPage::new(ctrl)
        .column(Column::text("Código", |c: &Categoria| c.codigo.clone()))
        .column(Column::text("Nombre", |c: &Categoria| c.nombre.clone()).min_width(200.0))
        .column(Column::flag("Estado", |c: &Categoria| c.activo))
        .view()
}
