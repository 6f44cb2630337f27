use contracts::domain::a401_sales_zone::{ZonaVenta, ZonaVentaRequest, ENTITY_METADATA};
use contracts::shared::api_error::ErrorMessages;

use crate::shared::rest::{ResourceDef, RestResource};

pub struct ZonaVentaApi;

impl ResourceDef for ZonaVentaApi {
    type Response = ZonaVenta;
    type Request = ZonaVentaRequest;
    const PATH: &'static str = "/ventas/zonas-venta";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}

pub const SCOPES: &[(&str, &str)] = &[("", "Todas"), ("/activas", "Activas")];

pub async fn find_by_codigo(codigo: String) -> Result<ZonaVenta, String> {
    RestResource::<ZonaVentaApi>::new()
        .get_one(&format!("/codigo/{}", urlencoding::encode(&codigo)))
        .await
}
