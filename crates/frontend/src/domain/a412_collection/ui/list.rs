use contracts::domain::a412_collection::{
    AnulacionRequest, Cobro, CollectionAction, CollectionState, VOID_REASON_PROMPT,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a412_collection::api::{anular, confirmar, CobroSource};
use crate::shared::crud::{row_button, Column, CrudPage, PageController};
use crate::shared::notifications::Notifier;

async fn run_collection_action(ctrl: PageController<CobroSource>, cobro: Cobro, action: CollectionAction) {
    let notifier = ctrl.notifier();
    match action {
        CollectionAction::Confirmar => {
            if let Err(message) = cobro.estado.can_confirm() {
                notifier.warning(message, None).await;
                return;
            }
            let accepted = notifier
                .confirm(&cobro.confirm_prompt(), Some(action.label()), Some(action.label()), None)
                .await;
            if accepted {
                ctrl.run_action(confirmar(cobro.id), action.success_message(), action.error_title())
                    .await;
            }
        }
        CollectionAction::Anular => {
            if let Err(message) = cobro.estado.can_void() {
                notifier.warning(message, None).await;
                return;
            }
            let motivo = notifier
                .input_text(action.label(), VOID_REASON_PROMPT, None)
                .await;
            // sin motivo no se anula
            if let Some(request) = AnulacionRequest::from_input(motivo) {
                ctrl.run_action(anular(cobro.id, request), action.success_message(), action.error_title())
                    .await;
            }
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CobroList() -> impl IntoView {
    let ctrl = PageController::mount(CobroSource);
    let estado = RwSignal::new(None::<CollectionState>);

    CrudPage::new(ctrl)
        .toolbar(view! {
            <select
                class="filter-panel__select"
                on:change=move |ev| estado.set(CollectionState::from_str_opt(&event_target_value(&ev)))
            >
                <option value="">"Todos los estados"</option>
                {CollectionState::ALL
                    .iter()
                    .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                    .collect_view()}
            </select>
        })
        .row_filter(move |c: &Cobro| estado.get().map_or(true, |e| c.estado == e))
        .column(Column::text("Número", |c: &Cobro| c.numero_cobro.clone()))
        .column(Column::text("Cliente", |c: &Cobro| c.cliente_nombre.clone()).min_width(200.0))
        .column(Column::date("Fecha", |c: &Cobro| Some(c.fecha_cobro.clone())))
        .column(Column::text("Forma de pago", |c: &Cobro| c.forma_pago_nombre.clone()))
        .column(Column::opt_text("Documento", |c: &Cobro| c.numero_documento.clone()))
        .column(Column::money("Monto", |c: &Cobro| c.monto_total))
        .column(Column::money("Disponible", |c: &Cobro| c.monto_disponible))
        .column(Column::badge("Estado", |c: &Cobro| {
            (c.estado.label().to_string(), c.estado.badge_class())
        }))
        .row_actions(move |c: &Cobro| {
            c.actions()
                .into_iter()
                .map(|action| {
                    let cobro = c.clone();
                    let icon = match action {
                        CollectionAction::Confirmar => "check",
                        CollectionAction::Anular => "ban",
                    };
                    row_button(icon, action.label(), move || {
                        spawn_local(run_collection_action(ctrl, cobro.clone(), action));
                    })
                })
                .collect_view()
                .into_any()
        })
        .view()
}
