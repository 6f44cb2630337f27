use contracts::domain::a206_process_action::AccionProcesoDetalle;
use leptos::prelude::*;

use crate::domain::a206_process_action::api::AccionProcesoSource;
use crate::shared::crud::{ref_filter, Column, CrudPage, PageController};

#[component]
#[allow(non_snake_case)]
pub fn AccionProcesoList() -> impl IntoView {
    let source = AccionProcesoSource::new();
    let ctrl = PageController::mount(source);

    CrudPage::new(ctrl)
        .toolbar(ref_filter(ctrl, "procesoId", "Todos los procesos", source.proceso_id))
        .column(Column::text("Código", |a: &AccionProcesoDetalle| a.base.codigo.clone()))
        .column(Column::text("Proceso", |a: &AccionProcesoDetalle| {
            format!("{} - {}", a.proceso_codigo, a.proceso_nombre)
        }).min_width(220.0))
        .view()
}
