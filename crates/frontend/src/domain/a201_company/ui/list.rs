use contracts::domain::a201_company::Empresa;
use leptos::prelude::*;

use crate::domain::a201_company::api::{find_by_nit, EmpresaApi};
use crate::shared::crud::{lookup_box, Column, CrudPage, PageController, RestSource};

#[component]
#[allow(non_snake_case)]
pub fn EmpresaList() -> impl IntoView {
    let ctrl = PageController::mount(RestSource::<EmpresaApi>::new());

    CrudPage::new(ctrl)
        .toolbar(lookup_box(ctrl, "Buscar por NIT", find_by_nit))
        .column(Column::text("NIT", |e: &Empresa| e.nit.clone()))
        .column(Column::text("Nombre", |e: &Empresa| e.nombre.clone()).min_width(200.0))
        .column(Column::text("Dirección", |e: &Empresa| e.direccion.clone()))
        .column(Column::text("Teléfono", |e: &Empresa| e.telefono.clone()))
        .column(Column::text("Email", |e: &Empresa| e.email.clone()))
        .column(Column::flag("Estado", |e: &Empresa| e.activo))
        .view()
}
