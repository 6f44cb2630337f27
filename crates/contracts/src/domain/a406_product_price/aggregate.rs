use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS, MIN_PRICE_MESSAGE};
use crate::domain::a311_product::Producto;
use crate::domain::a315_inventory_movement::PRODUCT_NOT_FOUND;
use crate::domain::common::{check_date_range, date_input, AggregateRoot};
use crate::shared::enrichment::{Lookup, NOT_AVAILABLE};
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata, FormWarning};
use crate::shared::search::Searchable;

/// Precio de un producto dentro de una lista; el backend incluye los datos
/// de la lista pero no los del producto
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrecioProducto {
    pub id: i64,
    pub lista_precios_id: i64,
    pub lista_precios_nombre: String,
    pub lista_precios_codigo: String,
    pub lista_precios_tipo: String,
    pub producto_id: i64,
    pub precio: f64,
    pub precio_minimo: Option<f64>,
    pub fecha_vigencia_desde: String,
    pub fecha_vigencia_hasta: Option<String>,
    pub activo: bool,
    pub fecha_creacion: Option<String>,
    pub fecha_modificacion: Option<String>,
    pub esta_vigente: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrecioProductoRequest {
    pub lista_precios_id: i64,
    pub producto_id: i64,
    pub precio: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precio_minimo: Option<f64>,
    pub fecha_vigencia_desde: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_vigencia_hasta: Option<String>,
    pub activo: bool,
}

impl Default for PrecioProductoRequest {
    fn default() -> Self {
        Self {
            lista_precios_id: 0,
            producto_id: 0,
            precio: 0.0,
            precio_minimo: None,
            fecha_vigencia_desde: String::new(),
            fecha_vigencia_hasta: None,
            activo: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrecioProductoDetalle {
    #[serde(flatten)]
    pub base: PrecioProducto,
    pub producto_nombre: String,
    pub producto_sku: String,
}

pub fn enrich(precios: &[PrecioProducto], productos: &[Producto]) -> Vec<PrecioProductoDetalle> {
    let productos = Lookup::by(productos, |p| p.id);
    precios
        .iter()
        .map(|p| {
            let producto = Some(p.producto_id);
            PrecioProductoDetalle {
                base: p.clone(),
                producto_nombre: productos.text(
                    producto,
                    |x| x.producto_nombre.clone(),
                    PRODUCT_NOT_FOUND,
                ),
                producto_sku: productos.text(producto, |x| x.sku.clone(), NOT_AVAILABLE),
            }
        })
        .collect()
}

impl Searchable for PrecioProductoDetalle {
    const SEARCH_FIELDS: &'static [&'static str] = &[
        "listaPreciosNombre",
        "listaPreciosCodigo",
        "productoNombre",
        "productoSku",
    ];
}

impl AggregateRoot for PrecioProductoDetalle {
    type Request = PrecioProductoRequest;

    fn id(&self) -> Option<i64> {
        Some(self.base.id)
    }

    fn to_request(&self) -> PrecioProductoRequest {
        PrecioProductoRequest {
            lista_precios_id: self.base.lista_precios_id,
            producto_id: self.base.producto_id,
            precio: self.base.precio,
            precio_minimo: self.base.precio_minimo,
            fecha_vigencia_desde: date_input(&self.base.fecha_vigencia_desde),
            fecha_vigencia_hasta: self.base.fecha_vigencia_hasta.as_deref().map(date_input),
            activo: self.base.activo,
        }
    }

    fn display_name(&self) -> String {
        format!("{} ({})", self.producto_nombre, self.base.lista_precios_nombre)
    }

    fn entity_metadata_info() -> EntityMetadataInfo {
        ENTITY_METADATA
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn check(request: &PrecioProductoRequest) -> Result<(), FormWarning> {
        if let Some(minimo) = request.precio_minimo {
            if minimo > request.precio {
                return Err(FormWarning::new(MIN_PRICE_MESSAGE));
            }
        }
        check_date_range(
            &request.fecha_vigencia_desde,
            request.fecha_vigencia_hasta.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::validate_form;

    #[test]
    fn test_enrich_product_name() {
        let productos = vec![Producto {
            id: 5,
            sku: "SKU-5".into(),
            producto_nombre: "Leche".into(),
            ..Producto::default()
        }];
        let precios = vec![
            PrecioProducto {
                id: 1,
                producto_id: 5,
                lista_precios_nombre: "Público".into(),
                ..PrecioProducto::default()
            },
            PrecioProducto {
                id: 2,
                producto_id: 9,
                ..PrecioProducto::default()
            },
        ];
        let rows = enrich(&precios, &productos);
        assert_eq!(rows[0].display_name(), "Leche (Público)");
        assert_eq!(rows[1].producto_nombre, PRODUCT_NOT_FOUND);
        assert_eq!(rows[1].producto_sku, NOT_AVAILABLE);
    }

    #[test]
    fn test_price_rules() {
        let request = PrecioProductoRequest {
            lista_precios_id: 1,
            producto_id: 2,
            precio: 0.0,
            precio_minimo: Some(0.0),
            fecha_vigencia_desde: "2024-01-01".into(),
            ..PrecioProductoRequest::default()
        };
        let errors = validate_form(&request, FIELDS);
        assert_eq!(
            errors.get("precio").map(String::as_str),
            Some("Debe ser mayor o igual a 0.01")
        );
        assert!(errors.contains_key("precioMinimo"));

        let request = PrecioProductoRequest {
            precio: 2.0,
            precio_minimo: Some(3.0),
            ..request
        };
        assert_eq!(
            PrecioProductoDetalle::check(&request).unwrap_err().message,
            MIN_PRICE_MESSAGE
        );
    }
}
