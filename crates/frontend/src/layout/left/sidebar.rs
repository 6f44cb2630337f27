//! Menú lateral: un grupo desplegable por módulo, construido desde `ROUTES`.
//!
//! Los enlaces son `<a href>` normales; el router intercepta el clic.

use contracts::shared::navigation::{menu_groups, normalize_path, MenuGroup};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let location = use_location();

    let current_path = move || normalize_path(&location.pathname.get()).to_string();
    let collapsed = move || ctx.sidebar_collapsed.get();

    let groups = menu_groups()
        .into_iter()
        .map(|MenuGroup { module, items }| {
            if items.is_empty() {
                return view! {
                    <a
                        href="/"
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || current_path() == "/"
                        style:padding-left="12px"
                        title=module.label()
                    >
                        <div class="app-sidebar__item-content">
                            {icon(module.icon())}
                            <span class:hidden=collapsed>{module.label()}</span>
                        </div>
                    </a>
                }
                .into_any();
            }

            let expanded = move || ctx.active_module.get() == Some(module);
            let children = items
                .iter()
                .map(|route| {
                    let path = route.path;
                    view! {
                        <a
                            href=path
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || current_path() == path
                            style:padding-left="10px"
                            title=route.label
                        >
                            <div class="app-sidebar__item-content">
                                {icon(route.icon)}
                                <span class:hidden=collapsed>{route.label}</span>
                            </div>
                        </a>
                    }
                })
                .collect_view();

            view! {
                <div>
                    <div
                        class="app-sidebar__item"
                        style:padding-left="12px"
                        title=module.label()
                        on:click=move |_| ctx.set_active_module(module)
                    >
                        <div class="app-sidebar__item-content">
                            {icon(module.icon())}
                            <span class:hidden=collapsed>{module.label()}</span>
                        </div>
                        <div
                            class="app-sidebar__chevron"
                            class:app-sidebar__chevron--expanded=expanded
                        >
                            {icon("chevron-right")}
                        </div>
                    </div>
                    <div class="app-sidebar__children" class:hidden=move || !expanded()>
                        {children}
                    </div>
                </div>
            }
            .into_any()
        })
        .collect_view();

    view! { <div class="app-sidebar__content">{groups}</div> }
}
