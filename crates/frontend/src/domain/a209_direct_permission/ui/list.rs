use contracts::domain::a209_direct_permission::PermisoDirectoPersonalDetalle as Permiso;
use leptos::prelude::*;

use crate::domain::a209_direct_permission::api::PermisoDirectoSource;
use crate::shared::crud::{ref_filter, Column, CrudPage, PageController};

#[component]
#[allow(non_snake_case)]
pub fn PermisoDirectoList() -> impl IntoView {
    let source = PermisoDirectoSource::new();
    let ctrl = PageController::mount(source);

    CrudPage::new(ctrl)
        .toolbar(view! {
            {ref_filter(ctrl, "personaEmpresaId", "Todas las personas", source.persona_empresa_id)}
            {ref_filter(ctrl, "accionProcesoId", "Todas las acciones", source.accion_proceso_id)}
        })
        .column(Column::text("Persona", |p: &Permiso| p.persona_nombre.clone()).min_width(180.0))
        .column(Column::text("Cédula", |p: &Permiso| p.persona_cedula.clone()))
        .column(Column::text("Empresa", |p: &Permiso| p.empresa_nombre.clone()))
        .column(Column::text("Acción", |p: &Permiso| p.accion_proceso_codigo.clone()))
        .column(Column::text("Proceso", |p: &Permiso| p.proceso_nombre.clone()))
        .column(Column::date("Inicio", |p: &Permiso| Some(p.base.fecha_inicio.clone())))
        .column(Column::date("Fin", |p: &Permiso| p.base.fecha_fin.clone()))
        .view()
}
