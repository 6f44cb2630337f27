use contracts::domain::a101_employee::Persona;
use leptos::prelude::*;

use crate::domain::a101_employee::api::PersonaApi;
use crate::shared::crud::{Column, CrudPage, PageController, RestSource};

#[component]
#[allow(non_snake_case)]
pub fn PersonaList() -> impl IntoView {
    let ctrl = PageController::mount(RestSource::<PersonaApi>::new());

    CrudPage::new(ctrl)
        .column(Column::text("Cédula", |p: &Persona| p.cedula.clone()))
        .column(Column::text("Nombre", |p: &Persona| p.nombre.clone()).min_width(200.0))
        .column(Column::text("Teléfono", |p: &Persona| p.telefono.clone()))
        .column(Column::text("Email", |p: &Persona| p.email.clone()).min_width(180.0))
        .column(Column::text("Dirección", |p: &Persona| p.direccion.clone()))
        .column(Column::flag("Estado", |p: &Persona| p.activo))
        .view()
}
