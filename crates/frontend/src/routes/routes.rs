use contracts::shared::navigation::{route_for_path, DEFAULT_PATH};
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::{use_location, use_params_map};
use leptos_router::path;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::routes::registry::render_screen;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_CUSTOM};

/// Pantalla de la ruta `/:screen`; rutas desconocidas vuelven a la de inicio
#[component]
fn Screen() -> impl IntoView {
    let params = use_params_map();

    move || {
        let screen = params.with(|p| p.get("screen")).unwrap_or_default();
        match route_for_path(&format!("/{screen}")) {
            Some(route) => render_screen(route.key),
            None => {
                log::warn!("ruta desconocida: /{}", screen);
                view! { <Redirect path=DEFAULT_PATH /> }.into_any()
            }
        }
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let location = use_location();

    Effect::new(move |_| ctx.sync_with_path(&location.pathname.get()));

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Screen /> }.into_any()
        />
    }
}

/// La autenticación es cosa del backend: aquí solo se llega tras cerrar sesión
#[component]
fn LoginPage() -> impl IntoView {
    view! {
        <PageFrame page_id=page_id("login", PAGE_CAT_CUSTOM) category=PAGE_CAT_CUSTOM>
            <div class="login-placeholder">
                <h1>"Sesión cerrada"</h1>
                <p>"Inicia sesión de nuevo para continuar."</p>
                <a href=DEFAULT_PATH class="button button--primary">"Volver al inicio"</a>
            </div>
        </PageFrame>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path=DEFAULT_PATH /> }>
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/") view=|| view! { <Redirect path=DEFAULT_PATH /> } />
                <Route path=path!("/:screen") view=MainLayout />
            </Routes>
        </Router>
    }
}
