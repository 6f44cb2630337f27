//! Barra superior: colapsar menú, título y cierre de sesión.

use contracts::shared::navigation::LOGIN_PATH;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::layout::global_context::{clear_storage, AppGlobalContext};
use crate::shared::icons::icon;
use crate::shared::notifications::{NotificationService, Notifier};

pub const APP_TITLE: &str = "Sistema ERP";
pub const LOGOUT_MESSAGE: &str = "¿Estás seguro de que deseas cerrar sesión?";

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notifications =
        use_context::<NotificationService>().expect("NotificationService context not found");
    let navigate = use_navigate();

    let logout = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            if notifications.confirm(LOGOUT_MESSAGE, None, None, None).await {
                clear_storage();
                log::info!("sesión cerrada");
                navigate(LOGIN_PATH, Default::default());
            }
        });
    };

    let is_collapsed = move || ctx.sidebar_collapsed.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_sidebar()
                    title=move || if is_collapsed() { "Expandir menú" } else { "Contraer menú" }
                >
                    {move || if is_collapsed() {
                        icon("panel-left-open")
                    } else {
                        icon("panel-left-close")
                    }}
                </button>
                <span class="top-header__title">{APP_TITLE}</span>
            </div>

            <div class="top-header__actions">
                <button class="top-header__icon-btn" on:click=logout title="Cerrar sesión">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
