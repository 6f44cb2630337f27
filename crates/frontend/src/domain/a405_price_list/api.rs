use contracts::domain::a405_price_list::{ListaPrecios, ListaPreciosRequest, ENTITY_METADATA};
use contracts::shared::api_error::ErrorMessages;

use crate::shared::rest::ResourceDef;

pub struct ListaPreciosApi;

impl ResourceDef for ListaPreciosApi {
    type Response = ListaPrecios;
    type Request = ListaPreciosRequest;
    const PATH: &'static str = "/ventas/listas-precios";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
}

/// Vigentes o por tipo (`/tipo/{t}`)
pub const SCOPES: &[(&str, &str)] = &[
    ("", "Todas"),
    ("/vigentes", "Vigentes"),
    ("/tipo/PUBLICO", "Tipo: Público"),
    ("/tipo/MAYORISTA", "Tipo: Mayorista"),
    ("/tipo/DISTRIBUIDOR", "Tipo: Distribuidor"),
    ("/tipo/ESPECIAL", "Tipo: Especial"),
];
