use contracts::domain::a203_warehouse_manager::BodegaResponsableDetalle;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a203_warehouse_manager::api::BodegaResponsableSource;
use crate::shared::crud::{Column, CrudPage, PageController};

#[component]
#[allow(non_snake_case)]
pub fn BodegaResponsableList() -> impl IntoView {
    let source = BodegaResponsableSource::new();
    let ctrl = PageController::mount(source);

    // Todos, activos o los de una bodega
    let scope_filter = move || {
        let bodegas = ctrl.options_for("bodegaId");
        view! {
            <select
                class="filter-panel__select"
                on:change=move |ev| {
                    let scope = match event_target_value(&ev).as_str() {
                        "" => String::new(),
                        "activos" => "/activos".to_string(),
                        id => format!("/bodega/{}", id),
                    };
                    source.scope.set(scope);
                    spawn_local(async move { ctrl.load().await });
                }
            >
                <option value="">"Todas las asignaciones"</option>
                <option value="activos">"Solo activos"</option>
                {bodegas
                    .into_iter()
                    .map(|b| view! { <option value=b.value.to_string()>{b.label}</option> })
                    .collect_view()}
            </select>
        }
    };

    CrudPage::new(ctrl)
        .toolbar(scope_filter)
        .column(Column::text("Bodega", |r: &BodegaResponsableDetalle| {
            format!("{} - {}", r.bodega_codigo, r.bodega_nombre)
        }).min_width(180.0))
        .column(Column::text("Responsable", |r: &BodegaResponsableDetalle| r.persona_nombre.clone()))
        .column(Column::text("Cédula", |r: &BodegaResponsableDetalle| r.persona_cedula.clone()))
        .column(Column::date("Inicio", |r: &BodegaResponsableDetalle| Some(r.base.fecha_inicio.clone())))
        .column(Column::date("Fin", |r: &BodegaResponsableDetalle| r.base.fecha_fin.clone()))
        .column(Column::flag("Estado", |r: &BodegaResponsableDetalle| r.base.activo))
        .view()
}
