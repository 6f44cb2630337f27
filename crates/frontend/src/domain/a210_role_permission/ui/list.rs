use contracts::domain::a210_role_permission::RolProcesoPermisoDetalle as Permiso;
use leptos::prelude::*;

use crate::domain::a210_role_permission::api::RolProcesoPermisoSource;
use crate::shared::crud::{ref_filter, Column, CrudPage, PageController};

#[component]
#[allow(non_snake_case)]
pub fn RolProcesoPermisoList() -> impl IntoView {
    let source = RolProcesoPermisoSource::new();
    let ctrl = PageController::mount(source);

    CrudPage::new(ctrl)
        .toolbar(ref_filter(ctrl, "rolEmpresaId", "Todos los roles", source.rol_empresa_id))
        .column(Column::text("Rol", |p: &Permiso| p.rol_nombre.clone()).min_width(160.0))
        .column(Column::text("Empresa", |p: &Permiso| p.empresa_nombre.clone()))
        .column(Column::text("Acción", |p: &Permiso| p.accion_proceso_codigo.clone()))
        .column(Column::text("Proceso", |p: &Permiso| p.proceso_nombre.clone()))
        .view()
}
