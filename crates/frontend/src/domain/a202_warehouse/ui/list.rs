use contracts::domain::a202_warehouse::Bodega;
use leptos::prelude::*;

use crate::domain::a202_warehouse::api::{find_by_codigo, BodegaSource};
use crate::shared::crud::{lookup_box, Column, CrudPage, PageController};

#[component]
#[allow(non_snake_case)]
pub fn BodegaList() -> impl IntoView {
    let ctrl = PageController::mount(BodegaSource);

    CrudPage::new(ctrl)
        .toolbar(lookup_box(ctrl, "Buscar por código", find_by_codigo))
        .column(Column::text("Código", |b: &Bodega| b.codigo.clone()))
        .column(Column::text("Nombre", |b: &Bodega| b.nombre.clone()).min_width(180.0))
        .column(Column::text("Dirección", |b: &Bodega| b.direccion.clone()))
        .column(Column::text("Empresa", |b: &Bodega| b.empresa_nombre.clone()))
        .column(Column::opt_text("Unidad", |b: &Bodega| b.unidad_organizacional_nombre.clone()))
        .column(Column::flag("Estado", |b: &Bodega| b.activo))
        .view()
}
