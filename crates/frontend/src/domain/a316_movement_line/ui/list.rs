use contracts::domain::a316_movement_line::DetalleMovimiento;
use leptos::prelude::*;

use crate::domain::a316_movement_line::api::{DetalleMovimientoSource, MOVIMIENTO_FILTER};
use crate::shared::crud::{ref_filter, Column, CrudPage, PageController};
use crate::shared::format::{format_money, format_quantity};

/// Las líneas se editan desde su movimiento; aquí solo se consultan
#[component]
#[allow(non_snake_case)]
pub fn DetalleMovimientoList() -> impl IntoView {
    let source = DetalleMovimientoSource::new();
    let ctrl = PageController::mount(source);

    let total = move || {
        let total: f64 = ctrl.filtered().iter().map(|d| d.costo_total).sum();
        view! {
            <div class="totals-bar">
                <span>"Costo total: "</span>
                <strong>{format_money(total)}</strong>
            </div>
        }
    };

    CrudPage::new(ctrl)
        .read_only()
        .toolbar(ref_filter(ctrl, MOVIMIENTO_FILTER, "Todos los movimientos", source.movimiento_id))
        .column(Column::text("Producto", |d: &DetalleMovimiento| d.producto_nombre.clone()).min_width(200.0))
        .column(Column::opt_text("Lote", |d: &DetalleMovimiento| d.lote_numero.clone()))
        .column(Column::number("Cantidad", |d: &DetalleMovimiento| format_quantity(d.cantidad)))
        .column(Column::money("Costo unitario", |d: &DetalleMovimiento| d.costo_unitario))
        .column(Column::money("Costo total", |d: &DetalleMovimiento| d.costo_total))
        .column(Column::opt_text("Ubicación", |d: &DetalleMovimiento| d.ubicacion_fisica.clone()))
        .column(Column::opt_text("Observaciones", |d: &DetalleMovimiento| d.observaciones.clone()))
        .after_table(total)
        .view()
}
