//! Campos del formulario del modal, generados desde `FieldMetadata`

use contracts::shared::metadata::{FieldKind, FieldMetadata};
use leptos::prelude::*;

use super::controller::PageController;
use super::source::CrudSource;

pub const SELECT_PLACEHOLDER: &str = "Seleccione...";

/// Un grupo `label + control + error` para `field`.
///
/// `locked` deshabilita el control además de los campos `read_only`.
pub fn form_field<S: CrudSource>(
    ctrl: PageController<S>,
    field: FieldMetadata,
    locked: Signal<bool>,
) -> AnyView {
    let disabled = move || field.read_only || locked.get();
    let value = move || ctrl.field_value(field.name);
    let on_input = move |ev: leptos::ev::Event| ctrl.set_field(&field, &event_target_value(&ev));

    let control = match field.kind {
        FieldKind::Bool => view! {
            <input
                type="checkbox"
                id=field.name
                prop:checked=move || value() == "true"
                disabled=disabled
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    ctrl.set_field(&field, if checked { "true" } else { "false" });
                }
            />
        }
        .into_any(),
        FieldKind::TextArea => view! {
            <textarea
                id=field.name
                rows="3"
                placeholder=field.placeholder.unwrap_or_default()
                prop:value=value
                disabled=disabled
                on:input=on_input
            />
        }
        .into_any(),
        FieldKind::Ref => view! {
            <select id=field.name disabled=disabled on:change=on_input>
                <option value="">{SELECT_PLACEHOLDER}</option>
                {move || {
                    let current = value();
                    ctrl.options_for(field.name)
                        .into_iter()
                        .map(|opt| {
                            let key = opt.value.to_string();
                            let selected = key == current;
                            view! { <option value=key selected=selected>{opt.label}</option> }
                        })
                        .collect_view()
                }}
            </select>
        }
        .into_any(),
        FieldKind::Choice(choices) => view! {
            <select id=field.name disabled=disabled on:change=on_input>
                {(!field.is_required())
                    .then(|| view! { <option value="">{SELECT_PLACEHOLDER}</option> })}
                {move || {
                    let current = value();
                    choices
                        .iter()
                        .map(|(key, label)| {
                            let selected = *key == current;
                            view! { <option value=*key selected=selected>{*label}</option> }
                        })
                        .collect_view()
                }}
            </select>
        }
        .into_any(),
        kind => view! {
            <input
                type=kind.input_type()
                id=field.name
                step=kind.step()
                placeholder=field.placeholder.unwrap_or_default()
                prop:value=value
                disabled=disabled
                on:input=on_input
            />
        }
        .into_any(),
    };

    view! {
        <div class="form-group" class:form-group--check=matches!(field.kind, FieldKind::Bool)>
            <label for=field.name>
                {field.label}
                {field.is_required().then_some(" *")}
            </label>
            {control}
            {move || ctrl.field_error(&field).map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
    .into_any()
}

/// Todos los campos, en el orden de la declaración
pub fn form_fields<S: CrudSource>(
    ctrl: PageController<S>,
    fields: &'static [FieldMetadata],
    locked: Signal<bool>,
) -> AnyView {
    fields
        .iter()
        .map(|field| form_field(ctrl, *field, locked))
        .collect_view()
        .into_any()
}
