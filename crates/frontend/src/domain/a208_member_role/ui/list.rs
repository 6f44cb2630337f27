use contracts::domain::a208_member_role::PersonaEmpresaRolDetalle;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a208_member_role::api::PersonaEmpresaRolSource;
use crate::shared::crud::{ref_filter, Column, CrudPage, PageController};

#[component]
#[allow(non_snake_case)]
pub fn PersonaEmpresaRolList() -> impl IntoView {
    let source = PersonaEmpresaRolSource::new();
    let ctrl = PageController::mount(source);

    let toolbar = view! {
        {ref_filter(ctrl, "personaEmpresaId", "Todas las personas", source.persona_empresa_id)}
        {ref_filter(ctrl, "rolEmpresaId", "Todos los roles", source.rol_id)}
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
        .column(Column::text("Persona", |r: &PersonaEmpresaRolDetalle| r.persona_nombre.clone()).min_width(180.0))
        .column(Column::text("Cédula", |r: &PersonaEmpresaRolDetalle| r.persona_cedula.clone()))
        .column(Column::text("Empresa", |r: &PersonaEmpresaRolDetalle| r.empresa_nombre.clone()))
        .column(Column::text("Rol", |r: &PersonaEmpresaRolDetalle| r.rol_nombre.clone()))
        .column(Column::date("Asignación", |r: &PersonaEmpresaRolDetalle| Some(r.base.fecha_asignacion.clone())))
        .column(Column::date("Fin", |r: &PersonaEmpresaRolDetalle| r.base.fecha_fin.clone()))
        .column(Column::flag("Estado", |r: &PersonaEmpresaRolDetalle| r.base.activo))
        .view()
}
