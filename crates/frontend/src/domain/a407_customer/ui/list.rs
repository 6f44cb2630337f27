use contracts::domain::a407_customer::Cliente;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a407_customer::api::{
    find_by_identificacion, search_by_razon_social, ClienteSource, SCOPES,
};
use crate::shared::crud::{lookup_box, ref_filter, scope_select, Column, CrudPage, PageController};
use crate::shared::format::format_money;
use crate::shared::notifications::Notifier;

#[component]
#[allow(non_snake_case)]
pub fn ClienteList() -> impl IntoView {
    let source = ClienteSource::new();
    let ctrl = PageController::mount(source);

    let server_search = move |_| {
        let razon_social = ctrl.search.get_untracked().trim().to_string();
        spawn_local(async move {
            if razon_social.is_empty() {
                ctrl.load().await;
                return;
            }
            match search_by_razon_social(&razon_social).await {
                Ok(rows) => ctrl.rows.set(rows),
                Err(e) => ctrl.notifier().error(&e, Some("Error al buscar")).await,
            }
        });
    };

    CrudPage::new(ctrl)
        .toolbar(view! {
            {scope_select(ctrl, source.scope, SCOPES)}
            {ref_filter(ctrl, "vendedorId", "Todos los vendedores", source.vendedor_id)}
            {lookup_box(ctrl, "Buscar por identificación", find_by_identificacion)}
            <button class="button button--secondary" on:click=server_search>
                "Buscar razón social"
            </button>
        })
        .column(Column::text("Identificación", |c: &Cliente| {
            format!("{} {}", c.tipo_identificacion, c.numero_identificacion)
        }))
        .column(Column::text("Cliente", |c: &Cliente| c.nombre_visible()).min_width(220.0))
        .column(Column::opt_text("Tipo", |c: &Cliente| c.tipo_cliente_nombre.clone()))
        .column(Column::opt_text("Zona", |c: &Cliente| c.zona_venta_nombre.clone()))
        .column(Column::opt_text("Ciudad", |c: &Cliente| c.ciudad.clone()))
        .column(Column::opt_text("Email", |c: &Cliente| c.email.clone()))
        .column(Column::text("Límite crédito", |c: &Cliente| format_money(c.limite_credito)))
        .column(Column::flag("Estado", |c: &Cliente| c.activo))
        .view()
}
