use chrono::Utc;
use contracts::domain::a310_product_lot::ProductoLote;
use contracts::domain::common::parse_date;
use leptos::prelude::*;

use crate::domain::a310_product_lot::api::ProductoLoteApi;
use crate::shared::crud::{Column, CrudPage, PageController, RestSource};

fn vencido(lote: &ProductoLote) -> bool {
    parse_date(&lote.fecha_vencimiento)
        .map(|d| d < Utc::now().date_naive())
        .unwrap_or(false)
}

#[component]
#[allow(non_snake_case)]
pub fn ProductoLoteList() -> impl IntoView {
    let ctrl = PageController::mount(RestSource::<ProductoLoteApi>::new());

    CrudPage::new(ctrl)
        .column(Column::text("Lote", |l: &ProductoLote| l.numero_lote.clone()).min_width(140.0))
        .column(Column::date("Fabricación", |l: &ProductoLote| Some(l.fecha_fabricacion.clone())))
        .column(Column::date("Vencimiento", |l: &ProductoLote| Some(l.fecha_vencimiento.clone())))
        .column(Column::badge("Vigencia", |l: &ProductoLote| {
            if vencido(l) {
                ("Vencido".to_string(), "badge-danger")
            } else {
                ("Vigente".to_string(), "badge-success")
            }
        }))
        .column(Column::flag("Estado", |l: &ProductoLote| l.activo))
        .row_class(|l: &ProductoLote| if vencido(l) { "row--warning" } else { "" })
        .view()
}
