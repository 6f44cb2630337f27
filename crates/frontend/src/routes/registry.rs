//! Clave de pantalla (`a101`...) → vista de la lista

use crate::domain::a101_employee::ui::PersonaList;
use crate::domain::a102_access_role::ui::RolAccesoList;
use crate::domain::a103_employee_role::ui::PersonaRolList;
use crate::domain::a201_company::ui::EmpresaList;
use crate::domain::a202_warehouse::ui::BodegaList;
use crate::domain::a203_warehouse_manager::ui::BodegaResponsableList;
use crate::domain::a204_company_member::ui::PersonaEmpresaList;
use crate::domain::a205_process::ui::ProcesoList;
use crate::domain::a206_process_action::ui::AccionProcesoList;
use crate::domain::a207_company_role::ui::RolEmpresaList;
use crate::domain::a208_member_role::ui::PersonaEmpresaRolList;
use crate::domain::a209_direct_permission::ui::PermisoDirectoList;
use crate::domain::a210_role_permission::ui::RolProcesoPermisoList;
use crate::domain::a211_reporting_line::ui::ReporteJerarquicoList;
use crate::domain::a212_org_unit::ui::UnidadOrganizacionalList;
use crate::domain::a301_category::ui::CategoriaList;
use crate::domain::a302_subcategory::ui::SubcategoriaList;
use crate::domain::a303_group::ui::GrupoList;
use crate::domain::a304_subgroup::ui::SubgrupoList;
use crate::domain::a305_business_line::ui::LineaNegocioList;
use crate::domain::a306_cost_center::ui::CentroCostosList;
use crate::domain::a307_ledger_account::ui::CuentaContableList;
use crate::domain::a308_valuation_method::ui::MetodoValuacionList;
use crate::domain::a309_product_type::ui::ProductoTipoList;
use crate::domain::a310_product_lot::ui::ProductoLoteList;
use crate::domain::a311_product::ui::ProductoList;
use crate::domain::a312_stock::ui::ProductoExistenciasList;
use crate::domain::a313_product_accounting::ui::ProductoConfiguracionContableList;
use crate::domain::a314_movement_type::ui::TipoMovimientoList;
use crate::domain::a315_inventory_movement::ui::MovimientoInventarioList;
use crate::domain::a316_movement_line::ui::DetalleMovimientoList;
use crate::domain::a401_sales_zone::ui::ZonaVentaList;
use crate::domain::a402_customer_type::ui::TipoClienteList;
use crate::domain::a403_payment_term::ui::CondicionPagoList;
use crate::domain::a404_payment_method::ui::FormaPagoList;
use crate::domain::a405_price_list::ui::ListaPreciosList;
use crate::domain::a406_product_price::ui::PrecioProductoList;
use crate::domain::a407_customer::ui::ClienteList;
use crate::domain::a408_customer_contact::ui::ContactoClienteList;
use crate::domain::a409_customer_address::ui::DireccionClienteList;
use crate::domain::a410_invoice::ui::FacturaList;
use crate::domain::a411_invoice_line::ui::DetalleFacturaList;
use crate::domain::a412_collection::ui::CobroList;
use crate::domain::a413_receivable::ui::CuentaPorCobrarList;
use leptos::prelude::*;

/// Vista de la pantalla `key`; una clave sin pantalla muestra un aviso
pub fn render_screen(key: &str) -> AnyView {
    log::debug!("pantalla {}", key);

    match key {
        // Empleados
        "a101" => view! { <PersonaList /> }.into_any(),
        "a102" => view! { <RolAccesoList /> }.into_any(),
        "a103" => view! { <PersonaRolList /> }.into_any(),

        // Empresa
        "a201" => view! { <EmpresaList /> }.into_any(),
        "a202" => view! { <BodegaList /> }.into_any(),
        "a203" => view! { <BodegaResponsableList /> }.into_any(),
        "a204" => view! { <PersonaEmpresaList /> }.into_any(),
        "a205" => view! { <ProcesoList /> }.into_any(),
        "a206" => view! { <AccionProcesoList /> }.into_any(),
        "a207" => view! { <RolEmpresaList /> }.into_any(),
        "a208" => view! { <PersonaEmpresaRolList /> }.into_any(),
        "a209" => view! { <PermisoDirectoList /> }.into_any(),
        "a210" => view! { <RolProcesoPermisoList /> }.into_any(),
        "a211" => view! { <ReporteJerarquicoList /> }.into_any(),
        "a212" => view! { <UnidadOrganizacionalList /> }.into_any(),

        // Inventario
        "a301" => view! { <CategoriaList /> }.into_any(),
        "a302" => view! { <SubcategoriaList /> }.into_any(),
        "a303" => view! { <GrupoList /> }.into_any(),
        "a304" => view! { <SubgrupoList /> }.into_any(),
        "a305" => view! { <LineaNegocioList /> }.into_any(),
        "a306" => view! { <CentroCostosList /> }.into_any(),
        "a307" => view! { <CuentaContableList /> }.into_any(),
        "a308" => view! { <MetodoValuacionList /> }.into_any(),
        "a309" => view! { <ProductoTipoList /> }.into_any(),
        "a310" => view! { <ProductoLoteList /> }.into_any(),
        "a311" => view! { <ProductoList /> }.into_any(),
        "a312" => view! { <ProductoExistenciasList /> }.into_any(),
        "a313" => view! { <ProductoConfiguracionContableList /> }.into_any(),
        "a314" => view! { <TipoMovimientoList /> }.into_any(),
        "a315" => view! { <MovimientoInventarioList /> }.into_any(),
        "a316" => view! { <DetalleMovimientoList /> }.into_any(),

        // Ventas
        "a401" => view! { <ZonaVentaList /> }.into_any(),
        "a402" => view! { <TipoClienteList /> }.into_any(),
        "a403" => view! { <CondicionPagoList /> }.into_any(),
        "a404" => view! { <FormaPagoList /> }.into_any(),
        "a405" => view! { <ListaPreciosList /> }.into_any(),
        "a406" => view! { <PrecioProductoList /> }.into_any(),
        "a407" => view! { <ClienteList /> }.into_any(),
        "a408" => view! { <ContactoClienteList /> }.into_any(),
        "a409" => view! { <DireccionClienteList /> }.into_any(),
        "a410" => view! { <FacturaList /> }.into_any(),
        "a411" => view! { <DetalleFacturaList /> }.into_any(),
        "a412" => view! { <CobroList /> }.into_any(),
        "a413" => view! { <CuentaPorCobrarList /> }.into_any(),

        _ => {
            log::warn!("pantalla sin registrar: {}", key);
            view! {
                <div class="placeholder">
                    {format!("Pantalla no disponible: {key}")}
                </div>
            }
            .into_any()
        }
    }
}
