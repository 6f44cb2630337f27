use contracts::domain::a312_stock::ProductoExistencias;
use leptos::prelude::*;

use crate::domain::a312_stock::api::ExistenciasSource;
use crate::shared::crud::{Column, CrudPage, PageController};
use crate::shared::format::{format_money, format_quantity};

#[component]
#[allow(non_snake_case)]
pub fn ProductoExistenciasList() -> impl IntoView {
    let ctrl = PageController::mount(ExistenciasSource);

    // valorización de lo que muestra la tabla
    let total = move || {
        let rows = ctrl.filtered();
        let valor: f64 = rows.iter().map(|e| e.valor_total()).sum();
        view! {
            <div class="totals-bar">
                <span>"Valor total del inventario: "</span>
                <strong>{format_money(valor)}</strong>
            </div>
        }
    };

    CrudPage::new(ctrl)
        .after_table(total)
        .column(Column::text("Producto", |e: &ProductoExistencias| e.producto_nombre.clone()).min_width(200.0))
        .column(Column::text("Bodega", |e: &ProductoExistencias| e.bodega_nombre.clone()))
        .column(Column::opt_text("Lote", |e: &ProductoExistencias| e.lote_numero.clone()))
        .column(Column::number("Física", |e: &ProductoExistencias| format_quantity(e.cantidad_fisica)))
        .column(Column::number("Disponible", |e: &ProductoExistencias| format_quantity(e.cantidad_disponible)))
        .column(Column::number("Reservada", |e: &ProductoExistencias| format_quantity(e.cantidad_reservada)))
        .column(Column::money("Costo promedio", |e: &ProductoExistencias| e.costo_promedio))
        .column(Column::money("Valor", |e: &ProductoExistencias| e.valor_total()))
        .column(Column::opt_text("Ubicación", |e: &ProductoExistencias| e.ubicacion.clone()))
        .row_class(|e: &ProductoExistencias| if e.cantidad_disponible <= 0.0 { "row--warning" } else { "" })
        .view()
}
