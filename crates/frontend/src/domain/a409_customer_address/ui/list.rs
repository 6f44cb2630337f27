use contracts::domain::a409_customer_address::DireccionCliente;
use leptos::prelude::*;

use crate::domain::a409_customer_address::api::DireccionClienteSource;
use crate::shared::crud::{ref_filter, Column, CrudPage, PageController};

#[component]
#[allow(non_snake_case)]
pub fn DireccionClienteList() -> impl IntoView {
    let source = DireccionClienteSource::new();
    let ctrl = PageController::mount(source);

    CrudPage::new(ctrl)
        .toolbar(ref_filter(ctrl, "clienteId", "Todos los clientes", source.cliente_id))
        .column(Column::opt_text("Cliente", |d: &DireccionCliente| d.cliente_nombre.clone()).min_width(180.0))
        .column(Column::text("Tipo", |d: &DireccionCliente| d.tipo_direccion_label()))
        .column(Column::opt_text("Nombre", |d: &DireccionCliente| d.nombre_direccion.clone()))
        .column(Column::text("Dirección", |d: &DireccionCliente| d.direccion.clone()).min_width(220.0))
        .column(Column::opt_text("Ciudad", |d: &DireccionCliente| d.ciudad.clone()))
        .column(Column::opt_text("Provincia", |d: &DireccionCliente| d.provincia.clone()))
        .column(Column::yes_no("Principal", |d: &DireccionCliente| d.es_principal))
        .view()
}
