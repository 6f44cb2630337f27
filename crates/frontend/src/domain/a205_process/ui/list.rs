use contracts::domain::a205_process::Proceso;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a205_process::api::{find_by_codigo, search_by_nombre, ProcesoApi};
use crate::shared::crud::{lookup_box, Column, CrudPage, PageController, RestSource};
use crate::shared::notifications::Notifier;

#[component]
#[allow(non_snake_case)]
pub fn ProcesoList() -> impl IntoView {
    let ctrl = PageController::mount(RestSource::<ProcesoApi>::new());

    // búsqueda por nombre en el servidor; reemplaza las filas cargadas
    let server_search = move |_| {
        let nombre = ctrl.search.get_untracked().trim().to_string();
        spawn_local(async move {
            if nombre.is_empty() {
                ctrl.load().await;
                return;
            }
            match search_by_nombre(&nombre).await {
                Ok(rows) => ctrl.rows.set(rows),
                Err(e) => ctrl.notifier().error(&e, Some("Error al buscar")).await,
            }
        });
    };

    CrudPage::new(ctrl)
        .toolbar(view! {
            {lookup_box(ctrl, "Buscar por código", find_by_codigo)}
            <button class="button button--secondary" on:click=server_search>
                "Buscar en servidor"
            </button>
        })
        .column(Column::text("Código", |p: &Proceso| p.codigo.clone()))
        .column(Column::text("Nombre", |p: &Proceso| p.nombre.clone()).min_width(240.0))
        .view()
}
