use contracts::domain::a311_product::{Producto, TEMPERATURAS};
use contracts::shared::metadata::FieldKind;
use leptos::prelude::*;

use crate::domain::a311_product::api::{find_by_sku, ProductoSource};
use crate::shared::crud::{lookup_box, Column, CrudPage, PageController};
use crate::shared::format::format_quantity;

fn temperatura(p: &Producto) -> String {
    FieldKind::Choice(TEMPERATURAS)
        .choice_label(&p.temperatura)
        .map(str::to_string)
        .unwrap_or_else(|| p.temperatura.clone())
}

#[component]
#[allow(non_snake_case)]
pub fn ProductoList() -> impl IntoView {
    let ctrl = PageController::mount(ProductoSource);

    CrudPage::new(ctrl)
        .toolbar(lookup_box(ctrl, "Buscar por SKU", find_by_sku))
        .column(Column::text("SKU", |p: &Producto| p.sku.clone()))
        .column(Column::text("Nombre", |p: &Producto| p.producto_nombre.clone()).min_width(220.0))
        .column(Column::opt_text("Código de barras", |p: &Producto| p.codigo_barras.clone()))
        .column(Column::opt_text("Línea", |p: &Producto| p.linea_negocio_nombre.clone()))
        .column(Column::opt_text("Subgrupo", |p: &Producto| p.subgrupo_nombre.clone()))
        .column(Column::opt_text("Tipo", |p: &Producto| p.producto_tipo_nombre.clone()))
        .column(Column::text("Temperatura", temperatura))
        .column(Column::number("Mín / Máx", |p: &Producto| {
            format!("{} / {}", format_quantity(p.cantidad_minimo), format_quantity(p.cantidad_maxima))
        }))
        .column(Column::flag("Estado", |p: &Producto| p.estado))
        .view()
}
