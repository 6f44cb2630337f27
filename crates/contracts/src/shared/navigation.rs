//! Route table of the application
//!
//! Cada ruta declara su módulo una sola vez; el módulo activo del menú se
//! deduce de esta tabla y no de palabras clave en la URL.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::domain::*;

pub const DEFAULT_PATH: &str = "/empleados";
pub const LOGIN_PATH: &str = "/login";

/// Top-level group of the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppModule {
    Dashboard,
    Empleados,
    Empresa,
    Inventario,
    Ventas,
}

impl AppModule {
    pub const ALL: [AppModule; 5] = [
        Self::Dashboard,
        Self::Empleados,
        Self::Empresa,
        Self::Inventario,
        Self::Ventas,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Empleados => "empleados",
            Self::Empresa => "empresa",
            Self::Inventario => "inventario",
            Self::Ventas => "ventas",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Empleados => "Empleados",
            Self::Empresa => "Empresa",
            Self::Inventario => "Inventario",
            Self::Ventas => "Ventas",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Empleados => "users",
            Self::Empresa => "building",
            Self::Inventario => "inventory",
            Self::Ventas => "sales",
        }
    }
}

/// One routable screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    /// Entity index of the screen, e.g. `a201`
    pub key: &'static str,
    pub label: &'static str,
    pub module: AppModule,
    pub icon: &'static str,
}

const fn route(
    path: &'static str,
    meta: &crate::shared::metadata::EntityMetadataInfo,
    module: AppModule,
) -> RouteDef {
    RouteDef {
        path,
        key: meta.entity_index,
        label: meta.ui.list_name,
        module,
        icon: meta.ui.icon,
    }
}

const fn labeled(def: RouteDef, label: &'static str) -> RouteDef {
    RouteDef { label, ..def }
}

use AppModule::{Empleados as EMP, Empresa as EMPR, Inventario as INV, Ventas as VEN};

pub static ROUTES: &[RouteDef] = &[
    // Empleados
    route("/empleados", &a101_employee::ENTITY_METADATA, EMP),
    route("/roles", &a102_access_role::ENTITY_METADATA, EMP),
    labeled(
        route("/asignar-roles", &a103_employee_role::ENTITY_METADATA, EMP),
        "Asignar roles",
    ),
    // Empresa
    route("/empresas", &a201_company::ENTITY_METADATA, EMPR),
    route("/bodegas", &a202_warehouse::ENTITY_METADATA, EMPR),
    route("/bodegas-responsables", &a203_warehouse_manager::ENTITY_METADATA, EMPR),
    route("/personas-empresa", &a204_company_member::ENTITY_METADATA, EMPR),
    route("/procesos", &a205_process::ENTITY_METADATA, EMPR),
    route("/acciones-proceso", &a206_process_action::ENTITY_METADATA, EMPR),
    route("/roles-empresa", &a207_company_role::ENTITY_METADATA, EMPR),
    route("/personas-empresa-roles", &a208_member_role::ENTITY_METADATA, EMPR),
    route("/permisos-directos", &a209_direct_permission::ENTITY_METADATA, EMPR),
    route("/roles-procesos-permisos", &a210_role_permission::ENTITY_METADATA, EMPR),
    route("/reportes-jerarquicos", &a211_reporting_line::ENTITY_METADATA, EMPR),
    route("/unidades-organizacionales", &a212_org_unit::ENTITY_METADATA, EMPR),
    // Inventario
    route("/productos", &a311_product::ENTITY_METADATA, INV),
    route("/producto-lotes", &a310_product_lot::ENTITY_METADATA, INV),
    route("/producto-tipos", &a309_product_type::ENTITY_METADATA, INV),
    route("/producto-existencias", &a312_stock::ENTITY_METADATA, INV),
    route("/producto-configuracion-contable", &a313_product_accounting::ENTITY_METADATA, INV),
    route("/categorias", &a301_category::ENTITY_METADATA, INV),
    route("/subcategorias", &a302_subcategory::ENTITY_METADATA, INV),
    route("/grupos", &a303_group::ENTITY_METADATA, INV),
    route("/subgrupos", &a304_subgroup::ENTITY_METADATA, INV),
    route("/centros-costos", &a306_cost_center::ENTITY_METADATA, INV),
    route("/cuentas-contables", &a307_ledger_account::ENTITY_METADATA, INV),
    route("/lineas-negocio", &a305_business_line::ENTITY_METADATA, INV),
    route("/metodos-valuacion", &a308_valuation_method::ENTITY_METADATA, INV),
    route("/tipos-movimiento", &a314_movement_type::ENTITY_METADATA, INV),
    route("/movimientos-inventario", &a315_inventory_movement::ENTITY_METADATA, INV),
    route("/detalles-movimiento", &a316_movement_line::ENTITY_METADATA, INV),
    // Ventas
    route("/facturas", &a410_invoice::ENTITY_METADATA, VEN),
    route("/zonas-venta", &a401_sales_zone::ENTITY_METADATA, VEN),
    route("/tipos-cliente", &a402_customer_type::ENTITY_METADATA, VEN),
    route("/listas-precios", &a405_price_list::ENTITY_METADATA, VEN),
    route("/precios-producto", &a406_product_price::ENTITY_METADATA, VEN),
    route("/detalles-factura", &a411_invoice_line::ENTITY_METADATA, VEN),
    route("/clientes", &a407_customer::ENTITY_METADATA, VEN),
    route("/contactos-cliente", &a408_customer_contact::ENTITY_METADATA, VEN),
    route("/direcciones-cliente", &a409_customer_address::ENTITY_METADATA, VEN),
    route("/cobros", &a412_collection::ENTITY_METADATA, VEN),
    route("/condiciones-pago", &a403_payment_term::ENTITY_METADATA, VEN),
    route("/formas-pago", &a404_payment_method::ENTITY_METADATA, VEN),
    route("/cuentas-por-cobrar", &a413_receivable::ENTITY_METADATA, VEN),
];

static ROUTE_INDEX: Lazy<HashMap<&'static str, &'static RouteDef>> =
    Lazy::new(|| ROUTES.iter().map(|r| (r.path, r)).collect());

/// Strip query, fragment and trailing slash
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = path[..end].trim_end_matches('/');
    if path.is_empty() {
        "/"
    } else {
        path
    }
}

pub fn route_for_path(path: &str) -> Option<&'static RouteDef> {
    ROUTE_INDEX.get(normalize_path(path)).copied()
}

/// Module owning `path`; unknown paths belong to the dashboard
pub fn module_for_path(path: &str) -> AppModule {
    route_for_path(path)
        .map(|r| r.module)
        .unwrap_or(AppModule::Dashboard)
}

/// Path actually rendered: unknown paths fall back to the default screen
pub fn resolve_path(path: &str) -> &'static str {
    route_for_path(path)
        .map(|r| r.path)
        .unwrap_or(DEFAULT_PATH)
}

/// Sidebar group with its entries in table order
#[derive(Debug, Clone, PartialEq)]
pub struct MenuGroup {
    pub module: AppModule,
    pub items: Vec<&'static RouteDef>,
}

pub fn menu_groups() -> Vec<MenuGroup> {
    AppModule::ALL
        .iter()
        .map(|module| MenuGroup {
            module: *module,
            items: ROUTES.iter().filter(|r| r.module == *module).collect(),
        })
        .collect()
}

/// Selecting the already active module collapses it
pub fn toggle_module(current: Option<AppModule>, selected: AppModule) -> Option<AppModule> {
    if current == Some(selected) {
        None
    } else {
        Some(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_routes_are_unique() {
        let paths: HashSet<_> = ROUTES.iter().map(|r| r.path).collect();
        let keys: HashSet<_> = ROUTES.iter().map(|r| r.key).collect();
        assert_eq!(paths.len(), ROUTES.len());
        assert_eq!(keys.len(), ROUTES.len());
        assert_eq!(ROUTES.len(), 44);
    }

    #[test]
    fn test_module_for_path() {
        assert_eq!(module_for_path("/empleados"), AppModule::Empleados);
        assert_eq!(module_for_path("/asignar-roles"), AppModule::Empleados);
        // "roles-empresa" contiene "roles" pero pertenece a Empresa
        assert_eq!(module_for_path("/roles-empresa"), AppModule::Empresa);
        assert_eq!(module_for_path("/personas-empresa-roles"), AppModule::Empresa);
        assert_eq!(module_for_path("/producto-existencias"), AppModule::Inventario);
        assert_eq!(module_for_path("/cobros/?x=1"), AppModule::Ventas);
        assert_eq!(module_for_path("/compras"), AppModule::Dashboard);
        assert_eq!(module_for_path("/"), AppModule::Dashboard);
    }

    #[test]
    fn test_resolve_path() {
        assert_eq!(resolve_path("/"), DEFAULT_PATH);
        assert_eq!(resolve_path("/no-existe"), DEFAULT_PATH);
        assert_eq!(resolve_path("/facturas#top"), "/facturas");
        assert_eq!(normalize_path(""), "/");
    }

    #[test]
    fn test_menu_groups() {
        let groups = menu_groups();
        assert_eq!(groups.len(), 5);
        assert!(groups[0].items.is_empty());
        let empleados: Vec<_> = groups[1].items.iter().map(|r| r.label).collect();
        assert_eq!(empleados, vec!["Empleados", "Roles", "Asignar roles"]);
        assert_eq!(groups[2].items.len(), 12);
        assert_eq!(groups[3].items.len(), 16);
        assert_eq!(groups[4].items.len(), 13);
    }

    #[test]
    fn test_toggle_module() {
        assert_eq!(toggle_module(None, AppModule::Ventas), Some(AppModule::Ventas));
        assert_eq!(toggle_module(Some(AppModule::Ventas), AppModule::Ventas), None);
        assert_eq!(
            toggle_module(Some(AppModule::Empresa), AppModule::Ventas),
            Some(AppModule::Ventas)
        );
    }
}
