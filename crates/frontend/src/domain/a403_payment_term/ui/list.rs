use contracts::domain::a403_payment_term::CondicionPago;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a403_payment_term::api::{find_predeterminada, CondicionPagoApi, SCOPES};
use crate::shared::crud::{scope_select, Column, CrudPage, PageController, ScopedSource};
use crate::shared::notifications::Notifier;

#[component]
#[allow(non_snake_case)]
pub fn CondicionPagoList() -> impl IntoView {
    let source = ScopedSource::<CondicionPagoApi>::new();
    let ctrl = PageController::mount(source);

    let open_default = move |_| {
        spawn_local(async move {
            match find_predeterminada().await {
                Ok(condicion) => ctrl.edit(condicion).await,
                Err(e) => ctrl.notifier().info(&e, Some("Sin condición predeterminada")).await,
            }
        });
    };

    CrudPage::new(ctrl)
        .toolbar(view! {
            {scope_select(ctrl, source.scope, SCOPES)}
            <button class="button button--secondary" on:click=open_default>
                "Predeterminada"
            </button>
        })
        .column(Column::text("Código", |c: &CondicionPago| c.codigo.clone()))
        .column(Column::text("Nombre", |c: &CondicionPago| c.nombre.clone()).min_width(180.0))
        .column(Column::badge("Tipo", |c: &CondicionPago| {
            let tipo = c.tipo_label();
            let class = if tipo == "Contado" { "badge-success" } else { "badge-info" };
            (tipo.to_string(), class)
        }))
        .column(Column::number("Días crédito", |c: &CondicionPago| c.dias_credito.to_string()))
        .column(Column::number("Cuotas máx.", |c: &CondicionPago| {
            c.numero_cuotas_maximo.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string())
        }))
        .column(Column::yes_no("Predeterminada", |c: &CondicionPago| c.es_predeterminado))
        .column(Column::flag("Estado", |c: &CondicionPago| c.activo))
        .view()
}
