use contracts::domain::a405_price_list::ListaPrecios;
use leptos::prelude::*;

use crate::domain::a405_price_list::api::{ListaPreciosApi, SCOPES};
use crate::shared::crud::{scope_select, Column, CrudPage, PageController, ScopedSource};

#[component]
#[allow(non_snake_case)]
pub fn ListaPreciosList() -> impl IntoView {
    let source = ScopedSource::<ListaPreciosApi>::new();
    let ctrl = PageController::mount(source);

    CrudPage::new(ctrl)
        .toolbar(scope_select(ctrl, source.scope, SCOPES))
        .column(Column::text("Código", |l: &ListaPrecios| l.codigo.clone()))
        .column(Column::text("Nombre", |l: &ListaPrecios| l.nombre.clone()).min_width(180.0))
        .column(Column::text("Tipo", |l: &ListaPrecios| l.tipo_lista_label().to_string()))
        .column(Column::date("Desde", |l: &ListaPrecios| Some(l.fecha_vigencia_desde.clone())))
        .column(Column::date("Hasta", |l: &ListaPrecios| l.fecha_vigencia_hasta.clone()))
        .column(Column::badge("Vigencia", |l: &ListaPrecios| {
            if l.esta_vigente {
                ("Vigente".to_string(), "badge-success")
            } else {
                ("No vigente".to_string(), "badge-secondary")
            }
        }))
        .column(Column::number("Precios", |l: &ListaPrecios| l.cantidad_precios.to_string()))
        .column(Column::flag("Estado", |l: &ListaPrecios| l.activo))
        .view()
}
