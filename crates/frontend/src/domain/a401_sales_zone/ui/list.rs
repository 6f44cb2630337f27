use contracts::domain::a401_sales_zone::ZonaVenta;
use leptos::prelude::*;

use crate::domain::a401_sales_zone::api::{find_by_codigo, ZonaVentaApi, SCOPES};
use crate::shared::crud::{lookup_box, scope_select, Column, CrudPage, PageController, ScopedSource};

#[component]
#[allow(non_snake_case)]
pub fn ZonaVentaList() -> impl IntoView {
    let source = ScopedSource::<ZonaVentaApi>::new();
    let ctrl = PageController::mount(source);

    CrudPage::new(ctrl)
        .toolbar(view! {
            {scope_select(ctrl, source.scope, SCOPES)}
            {lookup_box(ctrl, "Buscar por código", find_by_codigo)}
        })
        .column(Column::text("Código", |z: &ZonaVenta| z.codigo.clone()))
        .column(Column::text("Nombre", |z: &ZonaVenta| z.nombre.clone()).min_width(180.0))
        .column(Column::opt_text("Descripción", |z: &ZonaVenta| z.descripcion.clone()))
        .column(Column::flag("Estado", |z: &ZonaVenta| z.activo))
        .view()
}
