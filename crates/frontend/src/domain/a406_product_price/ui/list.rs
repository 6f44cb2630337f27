use contracts::domain::a406_product_price::PrecioProductoDetalle;
use leptos::prelude::*;

use crate::domain::a406_product_price::api::PrecioProductoSource;
use crate::shared::crud::{ref_filter, Column, CrudPage, PageController};

#[component]
#[allow(non_snake_case)]
pub fn PrecioProductoList() -> impl IntoView {
    let source = PrecioProductoSource::new();
    let ctrl = PageController::mount(source);

    CrudPage::new(ctrl)
        .toolbar(view! {
            {ref_filter(ctrl, "listaPreciosId", "Todas las listas", source.lista_id)}
            {ref_filter(ctrl, "productoId", "Todos los productos", source.producto_id)}
        })
        .column(Column::text("Lista", |p: &PrecioProductoDetalle| {
            format!("{} - {}", p.base.lista_precios_codigo, p.base.lista_precios_nombre)
        }).min_width(180.0))
        .column(Column::text("SKU", |p: &PrecioProductoDetalle| p.producto_sku.clone()))
        .column(Column::text("Producto", |p: &PrecioProductoDetalle| p.producto_nombre.clone()).min_width(200.0))
        .column(Column::money("Precio", |p: &PrecioProductoDetalle| p.base.precio))
        .column(Column::money("Precio mínimo", |p: &PrecioProductoDetalle| {
            p.base.precio_minimo.unwrap_or_default()
        }))
        .column(Column::date("Desde", |p: &PrecioProductoDetalle| Some(p.base.fecha_vigencia_desde.clone())))
        .column(Column::date("Hasta", |p: &PrecioProductoDetalle| p.base.fecha_vigencia_hasta.clone()))
        .column(Column::badge("Vigencia", |p: &PrecioProductoDetalle| {
            if p.base.esta_vigente {
                ("Vigente".to_string(), "badge-success")
            } else {
                ("No vigente".to_string(), "badge-secondary")
            }
        }))
        .column(Column::flag("Estado", |p: &PrecioProductoDetalle| p.base.activo))
        .view()
}
