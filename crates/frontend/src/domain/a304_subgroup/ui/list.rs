use contracts::domain::a304_subgroup::Subgrupo;
use leptos::prelude::*;

use crate::domain::a304_subgroup::api::SubgrupoSource;
use crate::shared::crud::{Column, CrudPage, PageController};

#[component]
#[allow(non_snake_case)]
pub fn SubgrupoList() -> impl IntoView {
    let ctrl = PageController::mount(SubgrupoSource);

    CrudPage::new(ctrl)
        .column(Column::text("Código", |s: &Subgrupo| s.codigo.clone()))
        .column(Column::text("Nombre", |s: &Subgrupo| s.nombre.clone()).min_width(200.0))
        .column(Column::text("Grupo", |s: &Subgrupo| s.grupo_nombre.clone()))
        .column(Column::flag("Estado", |s: &Subgrupo| s.activo))
        .view()
}
