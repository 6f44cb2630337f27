use contracts::domain::a315_inventory_movement::{
    product_name, MovementAction, MovementState, MovimientoInventario,
};
use contracts::domain::common::format_date;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::lines::lines_editor;
use crate::domain::a315_inventory_movement::api::{transition, MovimientoSource};
use crate::shared::crud::{row_button, Column, CrudPage, PageController};
use crate::shared::format::{format_money, format_quantity};
use crate::shared::notifications::Notifier;

fn estado_class(estado: MovementState) -> &'static str {
    match estado {
        MovementState::Borrador => "badge-warning",
        MovementState::Confirmado => "badge-info",
        MovementState::Contabilizado => "badge-success",
        MovementState::Anulado => "badge-danger",
    }
}

fn action_icon(action: MovementAction) -> &'static str {
    match action {
        MovementAction::Confirmar => "check",
        MovementAction::Contabilizar => "file-text",
        MovementAction::Anular => "ban",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn MovimientoInventarioList() -> impl IntoView {
    let source = MovimientoSource::new();
    let ctrl = PageController::mount(source);
    let selected = RwSignal::new(None::<MovimientoInventario>);

    let run_transition = move |movimiento: MovimientoInventario, action: MovementAction| {
        spawn_local(async move {
            let message = format!(
                "¿{} el movimiento {}?",
                action.label(),
                movimiento.numero_movimiento
            );
            let accepted = ctrl
                .notifier()
                .confirm(&message, Some(action.label()), Some(action.label()), None)
                .await;
            if !accepted {
                return;
            }
            ctrl.run_action(
                transition(movimiento.id, action),
                action.success_message(),
                action.error_title(),
            )
            .await;
            selected.set(None);
        });
    };

    let detail = move || {
        selected.get().map(|m| {
            let productos = source.productos.get();
            let total = m.total();
            view! {
                <div class="details-container movement-detail">
                    <div class="details-header">
                        <h3>{format!("Detalles del movimiento {}", m.numero_movimiento)}</h3>
                        <button class="button button--secondary" on:click=move |_| selected.set(None)>
                            "Cerrar"
                        </button>
                    </div>
                    <table class="movement-lines__table">
                        <thead>
                            <tr>
                                <th>"Producto"</th>
                                <th>"Lote"</th>
                                <th>"Cantidad"</th>
                                <th>"Costo unitario"</th>
                                <th>"Costo total"</th>
                                <th>"Ubicación"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {m.detalles
                                .into_iter()
                                .map(|d| {
                                    let nombre = if d.producto_nombre.is_empty() {
                                        product_name(&productos, d.producto_id)
                                    } else {
                                        d.producto_nombre.clone()
                                    };
                                    view! {
                                        <tr>
                                            <td>{nombre}</td>
                                            <td>{d.lote_numero.unwrap_or_else(|| "-".to_string())}</td>
                                            <td class="cell--number">{format_quantity(d.cantidad)}</td>
                                            <td class="cell--number">{format_money(d.costo_unitario)}</td>
                                            <td class="cell--number">{format_money(d.costo_total)}</td>
                                            <td>{d.ubicacion_fisica.unwrap_or_else(|| "-".to_string())}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                    <div class="movement-lines__total">
                        "Total: " <strong>{format_money(total)}</strong>
                    </div>
                </div>
            }
        })
    };

    CrudPage::new(ctrl)
        .column(Column::text("Número", |m: &MovimientoInventario| m.numero_movimiento.clone()))
        .column(Column::text("Tipo", |m: &MovimientoInventario| m.tipo_movimiento_nombre.clone()).min_width(160.0))
        .column(Column::text("Fecha", |m: &MovimientoInventario| format_date(&m.fecha_movimiento)))
        .column(Column::opt_text("Documento", |m: &MovimientoInventario| m.documento_referencia.clone()))
        .column(Column::badge("Estado", |m: &MovimientoInventario| {
            (m.estado.label().to_string(), estado_class(m.estado))
        }))
        .column(Column::number("Líneas", |m: &MovimientoInventario| m.detalles.len().to_string()))
        .column(Column::money("Total", |m: &MovimientoInventario| m.total()))
        .row_actions(move |m: &MovimientoInventario| {
            m.estado
                .actions()
                .iter()
                .map(|action| {
                    let action = *action;
                    let movimiento = m.clone();
                    row_button(action_icon(action), action.label(), move || {
                        run_transition(movimiento.clone(), action)
                    })
                })
                .collect_view()
                .into_any()
        })
        .on_row_click(move |m: &MovimientoInventario| selected.set(Some(m.clone())))
        .form_extra(move || lines_editor(ctrl, Signal::stored(false)))
        .after_table(detail)
        .view()
}
