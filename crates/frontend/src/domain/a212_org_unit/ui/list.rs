use contracts::domain::a212_org_unit::UnidadOrganizacionalDetalle as Unidad;
use leptos::prelude::*;

use crate::domain::a212_org_unit::api::UnidadOrganizacionalSource;
use crate::shared::crud::{Column, CrudPage, PageController};

#[component]
#[allow(non_snake_case)]
pub fn UnidadOrganizacionalList() -> impl IntoView {
    let ctrl = PageController::mount(UnidadOrganizacionalSource);

    CrudPage::new(ctrl)
        .column(Column::text("Nombre", |u: &Unidad| u.base.nombre.clone()).min_width(180.0))
        .column(Column::text("Tipo", |u: &Unidad| u.base.tipo.clone()))
        .column(Column::text("Empresa", |u: &Unidad| u.empresa_nombre.clone()))
        .column(Column::text("Unidad padre", |u: &Unidad| u.unidad_padre_nombre.clone()))
        .column(Column::flag("Estado", |u: &Unidad| u.base.activo.unwrap_or(true)))
        .view()
}
