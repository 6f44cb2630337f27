//! PageFrame: raíz de cada pantalla.
//!
//! Pone en el elemento raíz:
//!   - `id` con el formato `{entidad}--{categoría}`, p. ej. `"a201--list"`
//!   - `data-page-category` con una de las constantes `PAGE_CAT_*`

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    #[prop(into)] page_id: String,
    category: &'static str,
    /// Clases extra tras la base
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        PAGE_CAT_CUSTOM => "page page--custom",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}
