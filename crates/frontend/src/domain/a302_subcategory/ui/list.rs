use contracts::domain::a302_subcategory::Subcategoria;
use leptos::prelude::*;

use crate::domain::a302_subcategory::api::SubcategoriaSource;
use crate::shared::crud::{Column, CrudPage, PageController};

#[component]
#[allow(non_snake_case)]
pub fn SubcategoriaList() -> impl IntoView {
    let ctrl = PageController::mount(SubcategoriaSource);

    CrudPage::new(ctrl)
        .column(Column::text("Código", |s: &Subcategoria| s.codigo.clone()))
        .column(Column::text("Nombre", |s: &Subcategoria| s.nombre.clone()).min_width(200.0))
        .column(Column::text("Categoría", |s: &Subcategoria| s.categoria_nombre.clone()))
        .column(Column::flag("Estado", |s: &Subcategoria| s.activo))
        .view()
}
