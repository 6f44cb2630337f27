use leptos::prelude::*;
use thaw::*;

use super::service::{Dialog, DialogKind, DialogOutcome, NotificationService};
use super::{ToastPosition, REQUIRED_INPUT};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;

/// Pinta el diálogo abierto y los toasts del [`NotificationService`] en contexto.
#[component]
#[allow(non_snake_case)]
pub fn NotificationHost() -> impl IntoView {
    let service = use_context::<NotificationService>()
        .expect("NotificationService context not found");

    view! {
        {move || {
            service
                .dialog
                .get()
                .map(|dialog| view! { <DialogView dialog=dialog service=service /> })
        }}
        {ToastPosition::ALL
            .into_iter()
            .map(|position| {
                view! {
                    <div class=format!("toast-container toast-container--{}", position.as_str())>
                        {move || {
                            service
                                .toasts
                                .get()
                                .into_iter()
                                .filter(|t| t.position == position)
                                .map(|toast| {
                                    let id = toast.id;
                                    view! {
                                        <div
                                            class=format!("toast toast--{}", toast.kind.css())
                                            on:click=move |_| service.dismiss_toast(id)
                                        >
                                            {icon(toast.kind.icon())}
                                            <span>{toast.message}</span>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                }
            })
            .collect_view()}
    }
}

#[component]
#[allow(non_snake_case)]
fn DialogView(dialog: Dialog, service: NotificationService) -> impl IntoView {
    let id = dialog.id;
    let kind = dialog.kind;
    let input = RwSignal::new(dialog.value.clone());
    let input_error = RwSignal::new(None::<&'static str>);

    let on_close = Callback::new(move |_| service.respond(id, DialogOutcome::Dismissed));

    if kind == DialogKind::Loading {
        return view! {
            <ModalFrame on_close=on_close close_on_overlay=false z_index=2000 modal_class="dialog dialog--loading">
                <div class="dialog__loading">
                    <Spinner />
                    <p>{dialog.message}</p>
                </div>
            </ModalFrame>
        }
        .into_any();
    }

    let (icon_name, css) = match kind {
        DialogKind::Notice(notice) => (notice.icon(), notice.css()),
        _ => ("help-circle", "question"),
    };

    let accept = move |_| {
        let outcome = match kind {
            DialogKind::Input => {
                let value = input.get_untracked().trim().to_string();
                if value.is_empty() {
                    input_error.set(Some(REQUIRED_INPUT));
                    return;
                }
                DialogOutcome::Input(value)
            }
            DialogKind::Confirm => DialogOutcome::Confirmed,
            _ => DialogOutcome::Dismissed,
        };
        service.respond(id, outcome);
    };

    let input_field = (kind == DialogKind::Input).then(|| {
        view! {
            <div class="form__group">
                <input
                    class="form__input"
                    type="text"
                    placeholder=dialog.placeholder.clone().unwrap_or_default()
                    prop:value=move || input.get()
                    on:input=move |ev| {
                        input.set(event_target_value(&ev));
                        input_error.set(None);
                    }
                />
                {move || input_error.get().map(|e| view! { <div class="form__error">{e}</div> })}
            </div>
        }
    });

    let cancel = dialog.cancel_label.clone().map(|label| {
        view! {
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| service.respond(id, DialogOutcome::Cancelled)
            >
                {label}
            </Button>
        }
    });

    view! {
        <ModalFrame on_close=on_close z_index=2000 modal_class=format!("dialog dialog--{}", css)>
            <div class="dialog__icon">{icon(icon_name)}</div>
            <h2 class="dialog__title">{dialog.title}</h2>
            {(kind == DialogKind::Input)
                .then(|| view! { <label class="form__label">{dialog.message.clone()}</label> })}
            {(kind != DialogKind::Input)
                .then(|| view! { <p class="dialog__message">{dialog.message.clone()}</p> })}
            {input_field}
            <div class="dialog__actions">
                {cancel}
                <Button appearance=ButtonAppearance::Primary on_click=accept>
                    {dialog.confirm_label}
                </Button>
            </div>
        </ModalFrame>
    }
    .into_any()
}
