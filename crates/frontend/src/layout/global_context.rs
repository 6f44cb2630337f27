use contracts::shared::navigation::{module_for_path, toggle_module, AppModule};
use leptos::prelude::*;
use web_sys::{window, Storage};

pub const SIDEBAR_COLLAPSED_KEY: &str = "sidebarCollapsed";

/// Estado global del shell: barra lateral y módulo desplegado
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub sidebar_collapsed: RwSignal<bool>,
    pub active_module: RwSignal<Option<AppModule>>,
}

impl AppGlobalContext {
    /// Lee `sidebarCollapsed` de localStorage una sola vez
    pub fn new() -> Self {
        let stored = local_storage().and_then(|s| s.get_item(SIDEBAR_COLLAPSED_KEY).ok().flatten());
        Self {
            sidebar_collapsed: RwSignal::new(parse_collapsed(stored.as_deref())),
            active_module: RwSignal::new(None),
        }
    }

    pub fn toggle_sidebar(&self) {
        let collapsed = !self.sidebar_collapsed.get_untracked();
        self.sidebar_collapsed.set(collapsed);
        match local_storage() {
            Some(storage) => {
                let value = serde_json::to_string(&collapsed).unwrap_or_default();
                if let Err(e) = storage.set_item(SIDEBAR_COLLAPSED_KEY, &value) {
                    log::warn!("no se pudo guardar {}: {:?}", SIDEBAR_COLLAPSED_KEY, e);
                }
            }
            None => log::warn!("localStorage no disponible"),
        }
    }

    /// Elegir el módulo ya activo lo cierra
    pub fn set_active_module(&self, module: AppModule) {
        self.active_module
            .update(|current| *current = toggle_module(*current, module));
    }

    /// Despliega el módulo dueño de `path` tras una navegación
    pub fn sync_with_path(&self, path: &str) {
        let module = match module_for_path(path) {
            AppModule::Dashboard => None,
            module => Some(module),
        };
        if module.is_some() && self.active_module.get_untracked() != module {
            self.active_module.set(module);
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// Valor guardado → colapsada; ausente o ilegible cuenta como `false`
pub fn parse_collapsed(stored: Option<&str>) -> bool {
    stored
        .and_then(|raw| serde_json::from_str::<bool>(raw).ok())
        .unwrap_or(false)
}

/// Vacía localStorage y sessionStorage (cierre de sesión)
pub fn clear_storage() {
    let Some(win) = window() else {
        return;
    };
    if let Ok(Some(storage)) = win.local_storage() {
        let _ = storage.clear();
    }
    if let Ok(Some(storage)) = win.session_storage() {
        let _ = storage.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_parse_collapsed() {
        assert!(parse_collapsed(Some("true")));
        assert!(!parse_collapsed(Some("false")));
        assert!(!parse_collapsed(Some("not json")));
        assert!(!parse_collapsed(None));
    }

    fn context() -> AppGlobalContext {
        AppGlobalContext {
            sidebar_collapsed: RwSignal::new(false),
            active_module: RwSignal::new(None),
        }
    }

    #[test]
    fn test_set_active_module_toggles() {
        let owner = Owner::new();
        owner.set();
        let ctx = context();

        ctx.set_active_module(AppModule::Ventas);
        assert_eq!(ctx.active_module.get_untracked(), Some(AppModule::Ventas));
        ctx.set_active_module(AppModule::Ventas);
        assert_eq!(ctx.active_module.get_untracked(), None);
    }

    #[test]
    fn test_sync_with_path() {
        let owner = Owner::new();
        owner.set();
        let ctx = context();

        ctx.sync_with_path("/roles-empresa");
        assert_eq!(ctx.active_module.get_untracked(), Some(AppModule::Empresa));
        // una ruta desconocida no cierra el módulo abierto
        ctx.sync_with_path("/desconocida");
        assert_eq!(ctx.active_module.get_untracked(), Some(AppModule::Empresa));
    }
}
