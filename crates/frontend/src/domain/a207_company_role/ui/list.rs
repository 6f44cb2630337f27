use contracts::domain::a207_company_role::RolEmpresaDetalle;
use leptos::prelude::*;

use crate::domain::a207_company_role::api::RolEmpresaSource;
use crate::shared::crud::{ref_filter, Column, CrudPage, PageController};

#[component]
#[allow(non_snake_case)]
pub fn RolEmpresaList() -> impl IntoView {
    let source = RolEmpresaSource::new();
    let ctrl = PageController::mount(source);

    CrudPage::new(ctrl)
        .toolbar(ref_filter(ctrl, "empresaId", "Todas las empresas", source.empresa_id))
        .column(Column::text("Nombre", |r: &RolEmpresaDetalle| r.base.nombre.clone()).min_width(160.0))
        .column(Column::opt_text("Descripción", |r: &RolEmpresaDetalle| r.base.descripcion.clone()))
        .column(Column::text("Empresa", |r: &RolEmpresaDetalle| r.empresa_nombre.clone()))
        .column(Column::text("NIT", |r: &RolEmpresaDetalle| r.empresa_nit.clone()))
        .column(Column::text("Rol padre", |r: &RolEmpresaDetalle| r.rol_padre_nombre.clone()))
        .view()
}
