use contracts::domain::a103_employee_role::PersonaRolDetalle;
use leptos::prelude::*;

use crate::domain::a103_employee_role::api::PersonaRolSource;
use crate::shared::crud::{Column, CrudPage, PageController};

#[component]
#[allow(non_snake_case)]
pub fn PersonaRolList() -> impl IntoView {
    let ctrl = PageController::mount(PersonaRolSource);

    CrudPage::new(ctrl)
        .column(Column::text("Empleado", |r: &PersonaRolDetalle| r.persona_nombre.clone()).min_width(200.0))
        .column(Column::text("Cédula", |r: &PersonaRolDetalle| r.persona_cedula.clone()))
        .column(Column::text("Rol", |r: &PersonaRolDetalle| r.rol_nombre.clone()))
        .column(Column::flag("Estado", |r: &PersonaRolDetalle| r.base.activo))
        .view()
}
