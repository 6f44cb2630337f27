use contracts::domain::a408_customer_contact::ContactoCliente;
use leptos::prelude::*;

use crate::domain::a408_customer_contact::api::ContactoClienteSource;
use crate::shared::crud::{ref_filter, Column, CrudPage, PageController};

#[component]
#[allow(non_snake_case)]
pub fn ContactoClienteList() -> impl IntoView {
    let source = ContactoClienteSource::new();
    let ctrl = PageController::mount(source);

    CrudPage::new(ctrl)
        .toolbar(ref_filter(ctrl, "clienteId", "Todos los clientes", source.cliente_id))
        .column(Column::text("Contacto", |c: &ContactoCliente| c.nombre_completo()).min_width(180.0))
        .column(Column::opt_text("Cliente", |c: &ContactoCliente| c.cliente_nombre.clone()).min_width(180.0))
        .column(Column::opt_text("Cargo", |c: &ContactoCliente| c.cargo.clone()))
        .column(Column::opt_text("Área", |c: &ContactoCliente| c.area.clone()))
        .column(Column::opt_text("Teléfono", |c: &ContactoCliente| {
            c.celular.clone().or_else(|| c.telefono.clone())
        }))
        .column(Column::opt_text("Email", |c: &ContactoCliente| c.email.clone()))
        .column(Column::yes_no("Principal", |c: &ContactoCliente| c.es_principal))
        .column(Column::yes_no("Recibe facturas", |c: &ContactoCliente| c.recibe_facturas))
        .view()
}
