use contracts::domain::a102_access_role::RolAcceso;
use leptos::prelude::*;

use crate::domain::a102_access_role::api::RolAccesoApi;
use crate::shared::crud::{Column, CrudPage, PageController, RestSource};

#[component]
#[allow(non_snake_case)]
pub fn RolAccesoList() -> impl IntoView {
    let ctrl = PageController::mount(RestSource::<RolAccesoApi>::new());

    CrudPage::new(ctrl)
        .column(Column::text("ID", |r: &RolAcceso| r.id.to_string()).min_width(60.0))
        .column(Column::text("Nombre", |r: &RolAcceso| r.nombre.clone()).min_width(240.0))
        .column(Column::flag("Estado", |r: &RolAcceso| r.activo))
        .view()
}
