use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Columna izquierda; colapsada deja solo los iconos
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div
            data-zone="left"
            class="left app-sidebar"
            class:app-sidebar--collapsed=move || ctx.sidebar_collapsed.get()
        >
            {children()}
        </div>
    }
}
