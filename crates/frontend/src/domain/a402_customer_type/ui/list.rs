use contracts::domain::a402_customer_type::TipoCliente;
use leptos::prelude::*;

use crate::domain::a402_customer_type::api::{find_by_codigo, TipoClienteApi, SCOPES};
use crate::shared::crud::{lookup_box, scope_select, Column, CrudPage, PageController, ScopedSource};

#[component]
#[allow(non_snake_case)]
pub fn TipoClienteList() -> impl IntoView {
    let source = ScopedSource::<TipoClienteApi>::new();
    let ctrl = PageController::mount(source);

    CrudPage::new(ctrl)
        .toolbar(view! {
            {scope_select(ctrl, source.scope, SCOPES)}
            {lookup_box(ctrl, "Buscar por código", find_by_codigo)}
        })
        .column(Column::text("Código", |t: &TipoCliente| t.codigo.clone()))
        .column(Column::text("Nombre", |t: &TipoCliente| t.nombre.clone()).min_width(180.0))
        .column(Column::opt_text("Descripción", |t: &TipoCliente| t.descripcion.clone()))
        .column(Column::date("Creado", |t: &TipoCliente| t.fecha_creacion.clone()))
        .column(Column::flag("Estado", |t: &TipoCliente| t.activo))
        .view()
}
