use contracts::domain::a404_payment_method::FormaPago;
use leptos::prelude::*;

use crate::domain::a404_payment_method::api::{find_by_codigo, FormaPagoApi, SCOPES};
use crate::shared::crud::{lookup_box, scope_select, Column, CrudPage, PageController, ScopedSource};

#[component]
#[allow(non_snake_case)]
pub fn FormaPagoList() -> impl IntoView {
    let source = ScopedSource::<FormaPagoApi>::new();
    let ctrl = PageController::mount(source);

    CrudPage::new(ctrl)
        .toolbar(view! {
            {scope_select(ctrl, source.scope, SCOPES)}
            {lookup_box(ctrl, "Buscar por código", find_by_codigo)}
        })
        .column(Column::text("Código", |f: &FormaPago| f.codigo.clone()))
        .column(Column::text("Nombre", |f: &FormaPago| f.nombre.clone()).min_width(180.0))
        .column(Column::opt_text("Descripción", |f: &FormaPago| f.descripcion.clone()))
        .column(Column::yes_no("Requiere referencia", |f: &FormaPago| f.requiere_referencia))
        .column(Column::flag("Estado", |f: &FormaPago| f.activo))
        .view()
}
