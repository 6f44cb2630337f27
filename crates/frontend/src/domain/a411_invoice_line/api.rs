use async_trait::async_trait;
use contracts::domain::a411_invoice_line::{DetalleFactura, DetalleFacturaRequest, ENTITY_METADATA};
use contracts::shared::api_error::ErrorMessages;
use leptos::prelude::*;

use crate::domain::a311_product::api::ProductoApi;
use crate::domain::a410_invoice::api::load_facturas;
use crate::shared::crud::{list_by, options, CrudSource, Loaded};
use crate::shared::rest::{ResourceDef, RestResource};

pub struct DetalleFacturaApi;

impl ResourceDef for DetalleFacturaApi {
    type Response = DetalleFactura;
    type Request = DetalleFacturaRequest;
    const PATH: &'static str = "/ventas/detalles-factura";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}

/// Sub-ruta con las líneas de una factura
pub fn lines_path(factura_id: i64) -> String {
    format!("/factura/{}", factura_id)
}

/// Líneas de una factura, para el panel de detalle de la lista de facturas
pub async fn load_lineas(factura_id: i64) -> Result<Vec<DetalleFactura>, String> {
    RestResource::<DetalleFacturaApi>::new()
        .get_list(&lines_path(factura_id))
        .await
}

/// Líneas de una factura (`/factura/{id}`) o todas
#[derive(Clone, Copy)]
pub struct DetalleFacturaSource {
    pub factura_id: RwSignal<Option<i64>>,
}

impl DetalleFacturaSource {
    pub fn new() -> Self {
        Self {
            factura_id: RwSignal::new(None),
        }
    }
}

#[async_trait(?Send)]
impl CrudSource for DetalleFacturaSource {
    type Entity = DetalleFactura;
    type Resource = DetalleFacturaApi;

    async fn load(&self) -> Result<Loaded<DetalleFactura>, String> {
        let producto_api = RestResource::<ProductoApi>::new();
        let (detalles, facturas, productos) = futures::try_join!(
            list_by::<DetalleFacturaApi>("/factura", self.factura_id.get_untracked()),
            load_facturas(),
            producto_api.find_all(),
        )?;

        Ok(Loaded::rows(detalles)
            .with_options("facturaId", options(&facturas, |f| f.id, |f| f.numero_factura.clone()))
            .with_options("productoId", options(&productos, |p| p.id, |p| p.label())))
    }

    /// Con una factura filtrada, las líneas nuevas van a ella
    fn default_request(&self) -> DetalleFacturaRequest {
        DetalleFacturaRequest {
            factura_id: self.factura_id.get_untracked().unwrap_or_default(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::api_url;

    #[test]
    fn test_lines_path() {
        let path = format!("{}{}", DetalleFacturaApi::PATH, lines_path(5));
        assert_eq!(
            api_url("http://erp:8080/api", &path),
            "http://erp:8080/api/ventas/detalles-factura/factura/5"
        );
    }
}
