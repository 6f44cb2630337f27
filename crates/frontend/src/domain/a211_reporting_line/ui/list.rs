use contracts::domain::a211_reporting_line::ReporteJerarquico;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a211_reporting_line::api::ReporteJerarquicoSource;
use crate::shared::crud::{ref_filter, Column, CrudPage, PageController};

fn persona(nombre: &Option<String>, cedula: &Option<String>) -> String {
    match (nombre, cedula) {
        (Some(n), Some(c)) => format!("{} ({})", n, c),
        (Some(n), None) => n.clone(),
        _ => "-".to_string(),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ReporteJerarquicoList() -> impl IntoView {
    let source = ReporteJerarquicoSource::new();
    let ctrl = PageController::mount(source);

    let toolbar = view! {
        {ref_filter(ctrl, "jefeId", "Todos los jefes", source.jefe_id)}
        {ref_filter(ctrl, "subordinadoId", "Todos los subordinados", source.subordinado_id)}
        <label class="filter-panel__check">
            <input
                type="checkbox"
                prop:checked=move || source.activos.get()
                on:change=move |ev| {
                    source.activos.set(event_target_checked(&ev));
                    spawn_local(async move { ctrl.load().await });
                }
            />
            "Solo activos"
        </label>
    };

    CrudPage::new(ctrl)
        .toolbar(toolbar)
        .column(Column::text("Subordinado", |r: &ReporteJerarquico| {
            persona(&r.subordinado_nombre, &r.subordinado_cedula)
        }).min_width(200.0))
        .column(Column::text("Jefe", |r: &ReporteJerarquico| persona(&r.jefe_nombre, &r.jefe_cedula)).min_width(200.0))
        .column(Column::date("Inicio", |r: &ReporteJerarquico| Some(r.fecha_inicio.clone())))
        .column(Column::date("Fin", |r: &ReporteJerarquico| r.fecha_fin.clone()))
        .column(Column::flag("Estado", |r: &ReporteJerarquico| r.activo))
        .view()
}
