use contracts::domain::a411_invoice_line::DetalleFactura;
use leptos::prelude::*;

use crate::domain::a411_invoice_line::api::DetalleFacturaSource;
use crate::shared::crud::{ref_filter, Column, CrudPage, PageController};
use crate::shared::format::{format_money, format_quantity};

#[component]
#[allow(non_snake_case)]
pub fn DetalleFacturaList() -> impl IntoView {
    let source = DetalleFacturaSource::new();
    let ctrl = PageController::mount(source);

    CrudPage::new(ctrl)
        .toolbar(ref_filter(ctrl, "facturaId", "Todas las facturas", source.factura_id))
        .column(Column::opt_text("Factura", |d: &DetalleFactura| d.factura_numero.clone()))
        .column(Column::opt_text("Código", |d: &DetalleFactura| d.producto_codigo.clone()))
        .column(Column::text("Producto", |d: &DetalleFactura| {
            d.producto_nombre.clone().unwrap_or_else(|| d.descripcion.clone())
        }).min_width(200.0))
        .column(Column::number("Cantidad", |d: &DetalleFactura| format_quantity(d.cantidad)))
        .column(Column::money("Precio", |d: &DetalleFactura| d.precio_unitario))
        .column(Column::money("Subtotal", |d: &DetalleFactura| d.subtotal))
        .column(Column::money("Impuesto", |d: &DetalleFactura| d.impuesto_monto.unwrap_or_default()))
        .column(Column::money("Total", |d: &DetalleFactura| d.total))
        .form_extra(move || {
            view! {
                <div class="totals-bar">
                    "Total de la línea: "
                    <strong>{move || ctrl.form.with(|f| format_money(f.total))}</strong>
                </div>
            }
            .into_any()
        })
        .view()
}
