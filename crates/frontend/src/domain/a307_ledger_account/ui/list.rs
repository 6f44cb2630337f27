use contracts::domain::a307_ledger_account::CuentaContable;
use leptos::prelude::*;

use crate::domain::a307_ledger_account::api::CuentaContableApi;
use crate::shared::crud::{Column, CrudPage, PageController, RestSource};

#[component]
#[allow(non_snake_case)]
pub fn CuentaContableList() -> impl IntoView {
    let ctrl = PageController::mount(RestSource::<CuentaContableApi>::new());

    CrudPage::new(ctrl)
        .column(Column::text("Nombre", |c: &CuentaContable| c.nombre.clone()).min_width(180.0))
        .column(Column::text("Descripción", |c: &CuentaContable| c.descripcion.clone()).min_width(240.0))
        .column(Column::flag("Estado", |c: &CuentaContable| c.activo))
        .view()
}
