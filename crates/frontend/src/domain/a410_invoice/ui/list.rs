use contracts::domain::a410_invoice::{
    AutorizacionSriRequest, Factura, InvoiceAction, InvoiceState, PagoRequest,
};
use contracts::domain::a411_invoice_line::{invoice_lines_total, DetalleFactura};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a410_invoice::api::{invoice_action, FacturaSource};
use crate::domain::a411_invoice_line::api::load_lineas;
use crate::shared::crud::{row_button, Column, CrudPage, PageController};
use crate::shared::format::{format_money, format_quantity};
use crate::shared::notifications::Notifier;
use crate::shared::rest::empty_body;

type Ctrl = PageController<FacturaSource>;

fn action_icon(action: InvoiceAction) -> &'static str {
    match action {
        InvoiceAction::RegistrarPago => "dollar",
        InvoiceAction::AutorizarSri => "check",
        InvoiceAction::Anular => "ban",
    }
}

/// Pide los datos de la acción y la envía; cancelar no hace nada
async fn run_invoice_action(ctrl: Ctrl, factura: Factura, action: InvoiceAction) {
    let notifier = ctrl.notifier();
    let (_, success) = action.success();
    let error_title = action.error_title();

    match action {
        InvoiceAction::RegistrarPago => {
            let saldo = format!("{:.2}", factura.saldo());
            let Some(raw) = notifier
                .input_text_with_value(action.label(), "Monto", None, &saldo)
                .await
            else {
                return;
            };
            let body = match PagoRequest::from_input(&raw) {
                Ok(body) => body,
                Err((title, message)) => {
                    notifier.warning(message, Some(title)).await;
                    return;
                }
            };
            ctrl.run_action(invoice_action(factura.id, action, &body), success, error_title)
                .await;
        }
        InvoiceAction::AutorizarSri => {
            let Some(numero_autorizacion) = notifier
                .input_text(action.label(), "Número de autorización", None)
                .await
            else {
                return;
            };
            let Some(clave_acceso) = notifier
                .input_text(action.label(), "Clave de acceso", None)
                .await
            else {
                return;
            };
            let body = AutorizacionSriRequest {
                numero_autorizacion: numero_autorizacion.trim().to_string(),
                clave_acceso: clave_acceso.trim().to_string(),
            };
            if let Err((title, message)) = body.validate() {
                notifier.warning(message, Some(title)).await;
                return;
            }
            ctrl.run_action(invoice_action(factura.id, action, &body), success, error_title)
                .await;
        }
        InvoiceAction::Anular => {
            let accepted = notifier
                .confirm(&factura.void_prompt(), Some(action.label()), Some(action.label()), None)
                .await;
            if accepted {
                let body = empty_body();
                ctrl.run_action(invoice_action(factura.id, action, &body), success, error_title)
                    .await;
            }
        }
    }
}

/// Panel con las líneas de la factura seleccionada
fn invoice_detail(
    factura: Factura,
    lineas: Vec<DetalleFactura>,
    loading: bool,
    selected: RwSignal<Option<Factura>>,
) -> impl IntoView {
    let total = invoice_lines_total(&lineas);
    let body = if loading {
        view! { <p class="details-loading">"Cargando detalles..."</p> }.into_any()
    } else if lineas.is_empty() {
        view! { <p class="details-empty">"La factura no tiene líneas"</p> }.into_any()
    } else {
        view! {
            <table class="movement-lines__table">
                <thead>
                    <tr>
                        <th>"Producto"</th>
                        <th>"Cantidad"</th>
                        <th>"Precio"</th>
                        <th>"Subtotal"</th>
                        <th>"Impuesto"</th>
                        <th>"Total"</th>
                    </tr>
                </thead>
                <tbody>
                    {lineas
                        .into_iter()
                        .map(|d| {
                            view! {
                                <tr>
                                    <td>{d.display_name()}</td>
                                    <td class="cell--number">{format_quantity(d.cantidad)}</td>
                                    <td class="cell--number">{format_money(d.precio_unitario)}</td>
                                    <td class="cell--number">{format_money(d.subtotal)}</td>
                                    <td class="cell--number">
                                        {format_money(d.impuesto_monto.unwrap_or_default())}
                                    </td>
                                    <td class="cell--number">{format_money(d.total)}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
            <div class="movement-lines__total">
                "Total: " <strong>{format_money(total)}</strong>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="details-container invoice-detail">
            <div class="details-header">
                <h3>{format!("Detalles de la factura {}", factura.numero_factura)}</h3>
                <button class="button button--secondary" on:click=move |_| selected.set(None)>
                    "Cerrar"
                </button>
            </div>
            {body}
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn FacturaList() -> impl IntoView {
    let ctrl = PageController::mount(FacturaSource);
    let estado = RwSignal::new(None::<InvoiceState>);
    let selected = RwSignal::new(None::<Factura>);
    let lineas = RwSignal::new(Vec::<DetalleFactura>::new());
    let lineas_loading = RwSignal::new(false);

    let show_detail = move |factura: &Factura| {
        let id = factura.id;
        selected.set(Some(factura.clone()));
        lineas.set(Vec::new());
        lineas_loading.set(true);
        spawn_local(async move {
            match load_lineas(id).await {
                // otra factura pudo seleccionarse mientras tanto
                Ok(rows) if selected.get_untracked().map(|f| f.id) == Some(id) => lineas.set(rows),
                Ok(_) => return,
                Err(e) => {
                    log::error!("facturas: líneas de {}: {}", id, e);
                    ctrl.notifier().error(&e, Some("Error al cargar detalles")).await;
                }
            }
            lineas_loading.set(false);
        });
    };

    let state_filter = view! {
        <select
            class="filter-panel__select"
            on:change=move |ev| estado.set(InvoiceState::from_str_opt(&event_target_value(&ev)))
        >
            <option value="">"Todos los estados"</option>
            {InvoiceState::ALL
                .iter()
                .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                .collect_view()}
        </select>
    };

    CrudPage::new(ctrl)
        .toolbar(state_filter)
        .row_filter(move |f: &Factura| estado.get().map_or(true, |e| f.estado == e))
        .column(Column::text("Número", |f: &Factura| f.numero_factura.clone()))
        .column(Column::opt_text("Cliente", |f: &Factura| f.cliente_nombre.clone()).min_width(200.0))
        .column(Column::date("Emisión", |f: &Factura| Some(f.fecha_emision.clone())))
        .column(Column::date("Vencimiento", |f: &Factura| Some(f.fecha_vencimiento.clone())))
        .column(Column::money("Total", |f: &Factura| f.total))
        .column(Column::money("Saldo", |f: &Factura| f.saldo()))
        .column(Column::badge("Estado", |f: &Factura| {
            (f.estado.label().to_string(), f.estado.badge_class())
        }))
        .column(Column::yes_no("SRI", |f: &Factura| f.autorizado_sri))
        .row_actions(move |f: &Factura| {
            f.actions()
                .into_iter()
                .map(|action| {
                    let factura = f.clone();
                    row_button(action_icon(action), action.label(), move || {
                        let factura = factura.clone();
                        spawn_local(run_invoice_action(ctrl, factura, action));
                    })
                })
                .collect_view()
                .into_any()
        })
        .on_row_click(show_detail)
        .after_table(move || {
            let pendiente: f64 = ctrl
                .rows
                .get()
                .iter()
                .filter(|f| f.estado != InvoiceState::Anulada)
                .map(Factura::saldo)
                .sum();
            let detail = selected
                .get()
                .map(|f| invoice_detail(f, lineas.get(), lineas_loading.get(), selected));
            view! {
                <div class="totals-bar">
                    "Saldo pendiente: " <strong>{format_money(pendiente)}</strong>
                </div>
                {detail}
            }
        })
        .view()
}
