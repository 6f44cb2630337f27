use contracts::domain::a204_company_member::PersonaEmpresaDetalle;
use leptos::prelude::*;

use crate::domain::a204_company_member::api::PersonaEmpresaSource;
use crate::shared::crud::{scope_select, Column, CrudPage, PageController};

const SCOPES: &[(&str, &str)] = &[("", "Todos"), ("/activos", "Activos")];

#[component]
#[allow(non_snake_case)]
pub fn PersonaEmpresaList() -> impl IntoView {
    let source = PersonaEmpresaSource::new();
    let ctrl = PageController::mount(source);

    CrudPage::new(ctrl)
        .toolbar(scope_select(ctrl, source.scope, SCOPES))
        .column(Column::text("Empleado", |m: &PersonaEmpresaDetalle| m.persona_nombre.clone()).min_width(180.0))
        .column(Column::text("Cédula", |m: &PersonaEmpresaDetalle| m.persona_cedula.clone()))
        .column(Column::text("Empresa", |m: &PersonaEmpresaDetalle| m.empresa_nombre.clone()))
        .column(Column::date("Ingreso", |m: &PersonaEmpresaDetalle| Some(m.base.fecha_ingreso.clone())))
        .column(Column::date("Salida", |m: &PersonaEmpresaDetalle| m.base.fecha_salida.clone()))
        .column(Column::flag("Estado", |m: &PersonaEmpresaDetalle| m.base.activo))
        .view()
}
