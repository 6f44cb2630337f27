use contracts::domain::a313_product_accounting::ProductoConfiguracionContable as Configuracion;
use leptos::prelude::*;

use crate::domain::a313_product_accounting::api::ConfiguracionContableSource;
use crate::shared::crud::{Column, CrudPage, PageController};

#[component]
#[allow(non_snake_case)]
pub fn ProductoConfiguracionContableList() -> impl IntoView {
    let ctrl = PageController::mount(ConfiguracionContableSource);

    CrudPage::new(ctrl)
        .column(Column::text("Producto", |c: &Configuracion| c.producto_nombre.clone()).min_width(200.0))
        .column(Column::text("Cuenta contable", |c: &Configuracion| c.cuenta_contable_nombre.clone()))
        .column(Column::text("Centro de costos", |c: &Configuracion| c.centro_costos_nombre.clone()))
        .column(Column::text("Método de valuación", |c: &Configuracion| c.metodo_valuacion_nombre.clone()))
        .column(Column::flag("Estado", |c: &Configuracion| c.activo))
        .view()
}
