use contracts::domain::a413_receivable::{CuentaPorCobrar, ReceivableFilter};
use leptos::prelude::*;

use crate::domain::a413_receivable::api::{CuentaPorCobrarSource, SCOPES};
use crate::shared::crud::{scope_select, Column, CrudPage, PageController};
use crate::shared::format::{format_money, format_percent};

#[component]
#[allow(non_snake_case)]
pub fn CuentaPorCobrarList() -> impl IntoView {
    let source = CuentaPorCobrarSource::new();
    let ctrl = PageController::mount(source);
    let filtro = RwSignal::new(ReceivableFilter::Todas);

    let tabs = move || {
        ReceivableFilter::ALL
            .iter()
            .map(|f| {
                let f = *f;
                view! {
                    <button
                        class="tab-button"
                        class:tab-button--active=move || filtro.get() == f
                        on:click=move |_| filtro.set(f)
                    >
                        {f.label()}
                    </button>
                }
            })
            .collect_view()
    };

    CrudPage::new(ctrl)
        .toolbar(scope_select(ctrl, source.scope, SCOPES))
        .before_table(view! { <div class="filter-tabs">{tabs}</div> })
        .row_filter(move |c: &CuentaPorCobrar| filtro.get().accepts(c))
        .row_class(|c: &CuentaPorCobrar| if c.esta_vencida { "row--warning" } else { "" })
        .column(Column::text("Cuenta", |c: &CuentaPorCobrar| c.numero_cuenta.clone()))
        .column(Column::opt_text("Factura", |c: &CuentaPorCobrar| c.factura_numero.clone()))
        .column(Column::text("Cliente", |c: &CuentaPorCobrar| c.cliente_nombre.clone()).min_width(200.0))
        .column(Column::date("Vencimiento", |c: &CuentaPorCobrar| Some(c.fecha_vencimiento.clone())))
        .column(Column::money("Original", |c: &CuentaPorCobrar| c.monto_original))
        .column(Column::money("Pagado", |c: &CuentaPorCobrar| c.monto_pagado))
        .column(Column::money("Pendiente", |c: &CuentaPorCobrar| c.monto_pendiente))
        .column(Column::text("% pagado", |c: &CuentaPorCobrar| format_percent(c.porcentaje_pagado())))
        .column(Column::number("Días vencidos", |c: &CuentaPorCobrar| {
            c.dias_vencidos.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
        }))
        .column(Column::badge("Estado", |c: &CuentaPorCobrar| {
            let status = c.status();
            (status.as_str().to_string(), status.badge_class())
        }))
        .after_table(move || {
            let pendiente: f64 = ctrl.rows.get().iter().map(|c| c.monto_pendiente).sum();
            view! {
                <div class="totals-bar">
                    "Total pendiente: " <strong>{format_money(pendiente)}</strong>
                </div>
            }
        })
        .view()
}
