use contracts::domain::a314_movement_type::TipoMovimiento;
use leptos::prelude::*;

use crate::domain::a314_movement_type::api::TipoMovimientoApi;
use crate::shared::crud::{Column, CrudPage, PageController, RestSource};

fn afecta_class(tipo: &TipoMovimiento) -> &'static str {
    match tipo.afecta_inventario.as_str() {
        "ENTRADA" => "badge-success",
        "SALIDA" => "badge-danger",
        _ => "badge-info",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn TipoMovimientoList() -> impl IntoView {
    let ctrl = PageController::mount(RestSource::<TipoMovimientoApi>::new());

    CrudPage::new(ctrl)
        .column(Column::text("Código", |t: &TipoMovimiento| t.codigo.clone()))
        .column(Column::text("Nombre", |t: &TipoMovimiento| t.nombre.clone()).min_width(180.0))
        .column(Column::opt_text("Descripción", |t: &TipoMovimiento| t.descripcion.clone()))
        .column(Column::badge("Afecta inventario", |t: &TipoMovimiento| {
            (t.afecta_inventario_label(), afecta_class(t))
        }))
        .column(Column::yes_no("Requiere aprobación", |t: &TipoMovimiento| t.requiere_aprobacion))
        .column(Column::yes_no("Genera asiento", |t: &TipoMovimiento| t.genera_asiento))
        .column(Column::flag("Estado", |t: &TipoMovimiento| t.activo))
        .view()
}
