//! Editor de las líneas dentro del modal del movimiento

use contracts::domain::a315_inventory_movement::EMPTY_LINES_MESSAGE;
use contracts::domain::a316_movement_line::FIELDS as LINE_FIELDS;
use contracts::shared::metadata::{apply_input, field_text, FieldKind, FieldMetadata};
use leptos::prelude::*;

use crate::domain::a315_inventory_movement::api::MovimientoSource;
use crate::shared::crud::{row_button, PageController};
use crate::shared::format::format_money;

type Ctrl = PageController<MovimientoSource>;

fn set_line_field(ctrl: Ctrl, index: usize, field: &FieldMetadata, raw: &str) {
    ctrl.update_form(|form| {
        let Some(line) = form.detalles.get(index) else {
            return;
        };
        match apply_input(line, field, raw) {
            Ok(next) => form.detalles.set_line(index, next),
            Err(e) => log::warn!("línea {}: {} no aplicado: {}", index + 1, field.name, e),
        }
    });
}

fn line_value(ctrl: Ctrl, index: usize, name: &str) -> String {
    ctrl.form.with(|form| {
        form.detalles
            .get(index)
            .map(|line| field_text(line, name))
            .unwrap_or_default()
    })
}

fn line_cell(ctrl: Ctrl, index: usize, field: FieldMetadata, locked: Signal<bool>) -> AnyView {
    let value = move || line_value(ctrl, index, field.name);
    let on_input = move |ev: leptos::ev::Event| {
        set_line_field(ctrl, index, &field, &event_target_value(&ev));
    };

    match field.kind {
        FieldKind::Ref => view! {
            <select disabled=move || locked.get() on:change=on_input>
                <option value="">"Seleccione..."</option>
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
        kind => view! {
            <input
                type=kind.input_type()
                step=kind.step()
                prop:value=value
                disabled=move || locked.get()
                on:input=on_input
            />
        }
        .into_any(),
    }
}

/// Tabla editable de líneas con su total
pub fn lines_editor(ctrl: Ctrl, locked: Signal<bool>) -> AnyView {
    // las filas solo se reconstruyen si cambia el número de líneas
    let count = Memo::new(move |_| ctrl.form.with(|form| form.detalles.len()));
    let invalid = Memo::new(move |_| ctrl.form.with(|form| form.detalles.invalid_lines()));
    let total = move || ctrl.form.with(|form| form.detalles.total());

    view! {
        <div class="movement-lines">
            <div class="movement-lines__header">
                <h4>"Detalles"</h4>
                <button
                    type="button"
                    class="button button--secondary"
                    disabled=move || locked.get()
                    on:click=move |_| ctrl.update_form(|form| form.detalles.add_line())
                >
                    "+ Agregar línea"
                </button>
            </div>
            <table class="movement-lines__table">
                <thead>
                    <tr>
                        {LINE_FIELDS
                            .iter()
                            .map(|f| view! { <th>{f.label}</th> })
                            .collect_view()}
                        <th>"Subtotal"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        (0..count.get())
                            .map(|index| {
                                let subtotal = move || {
                                    ctrl.form.with(|form| {
                                        form.detalles
                                            .get(index)
                                            .map(|l| l.line_total())
                                            .unwrap_or_default()
                                    })
                                };
                                view! {
                                    <tr class:row--invalid=move || invalid.with(|bad| bad.contains(&index))>
                                        {LINE_FIELDS
                                            .iter()
                                            .map(|f| view! { <td>{line_cell(ctrl, index, *f, locked)}</td> })
                                            .collect_view()}
                                        <td class="cell--number">{move || format_money(subtotal())}</td>
                                        <td>
                                            {row_button("trash", "Quitar línea", move || {
                                                if !locked.get_untracked() {
                                                    ctrl.update_form(|form| form.detalles.remove_line(index));
                                                }
                                            })}
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            {move || (count.get() == 0).then(|| view! { <div class="form__error">{EMPTY_LINES_MESSAGE}</div> })}
            <div class="movement-lines__total">
                "Total: " <strong>{move || format_money(total())}</strong>
            </div>
        </div>
    }
    .into_any()
}
