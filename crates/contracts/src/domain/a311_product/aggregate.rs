use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::common::{date_input, AggregateRoot};
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use crate::shared::search::Searchable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Producto {
    pub id: i64,
    pub sku: String,
    pub codigo_barras: Option<String>,
    pub codigo_interno: Option<String>,
    pub producto_nombre: String,
    pub presentacion: Option<String>,
    pub temperatura: String,
    pub peso: f64,
    pub volumen: f64,
    pub unidad_medida: Option<String>,
    pub cantidad_maxima: f64,
    pub cantidad_minimo: f64,
    pub cantidad_por_caja: i64,
    pub estado: bool,
    pub fecha_alta: Option<String>,
    pub activo: bool,
    pub linea_negocio_id: i64,
    pub linea_negocio_nombre: Option<String>,
    pub subgrupo_id: i64,
    pub subgrupo_nombre: Option<String>,
    pub producto_tipo_id: i64,
    pub producto_tipo_nombre: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductoRequest {
    pub sku: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codigo_barras: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codigo_interno: Option<String>,
    pub producto_nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentacion: Option<String>,
    pub temperatura: String,
    pub peso: f64,
    pub volumen: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unidad_medida: Option<String>,
    pub cantidad_maxima: f64,
    pub cantidad_minimo: f64,
    pub cantidad_por_caja: i64,
    pub estado: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_alta: Option<String>,
    pub linea_negocio_id: i64,
    pub subgrupo_id: i64,
    pub producto_tipo_id: i64,
}

impl Default for ProductoRequest {
    fn default() -> Self {
        Self {
            sku: String::new(),
            codigo_barras: None,
            codigo_interno: None,
            producto_nombre: String::new(),
            presentacion: None,
            temperatura: "AMBIENTE".to_string(),
            peso: 0.0,
            volumen: 0.0,
            unidad_medida: None,
            cantidad_maxima: 0.0,
            cantidad_minimo: 0.0,
            cantidad_por_caja: 1,
            estado: true,
            fecha_alta: None,
            linea_negocio_id: 0,
            subgrupo_id: 0,
            producto_tipo_id: 0,
        }
    }
}

impl Producto {
    /// `SKU - Nombre`, usado en selects de otras pantallas
    pub fn label(&self) -> String {
        format!("{} - {}", self.sku, self.producto_nombre)
    }
}

impl Searchable for Producto {
    const SEARCH_FIELDS: &'static [&'static str] = &["productoNombre", "sku", "codigoBarras"];
}

impl AggregateRoot for Producto {
    type Request = ProductoRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> ProductoRequest {
        ProductoRequest {
            sku: self.sku.clone(),
            codigo_barras: self.codigo_barras.clone(),
            codigo_interno: self.codigo_interno.clone(),
            producto_nombre: self.producto_nombre.clone(),
            presentacion: self.presentacion.clone(),
            temperatura: self.temperatura.clone(),
            peso: self.peso,
            volumen: self.volumen,
            unidad_medida: self.unidad_medida.clone(),
            cantidad_maxima: self.cantidad_maxima,
            cantidad_minimo: self.cantidad_minimo,
            cantidad_por_caja: self.cantidad_por_caja,
            estado: self.estado,
            fecha_alta: self.fecha_alta.as_deref().map(date_input),
            linea_negocio_id: self.linea_negocio_id,
            subgrupo_id: self.subgrupo_id,
            producto_tipo_id: self.producto_tipo_id,
        }
    }

    fn display_name(&self) -> String {
        self.producto_nombre.clone()
    }

    fn entity_metadata_info() -> EntityMetadataInfo {
        ENTITY_METADATA
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::validate_form;

    #[test]
    fn test_new_product_defaults() {
        let request = ProductoRequest::default();
        assert_eq!(request.temperatura, "AMBIENTE");
        assert_eq!(request.cantidad_por_caja, 1);
        assert!(request.estado);

        let errors = validate_form(&request, FIELDS);
        assert!(errors.contains_key("sku"));
        assert!(errors.contains_key("productoTipoId"));
        assert!(!errors.contains_key("temperatura"));
        assert!(!errors.contains_key("cantidadPorCaja"));
    }

    #[test]
    fn test_box_quantity_minimum() {
        let request = ProductoRequest {
            cantidad_por_caja: 0,
            peso: -1.0,
            ..ProductoRequest::default()
        };
        let errors = validate_form(&request, FIELDS);
        assert_eq!(
            errors.get("cantidadPorCaja").map(String::as_str),
            Some("Debe ser mayor o igual a 1")
        );
        assert_eq!(
            errors.get("peso").map(String::as_str),
            Some("Debe ser mayor o igual a 0")
        );
    }

    #[test]
    fn test_search_optional_barcode() {
        let producto = Producto {
            sku: "SKU-1".into(),
            producto_nombre: "Aceite".into(),
            codigo_barras: None,
            ..Producto::default()
        };
        assert!(producto.matches_filter("aceite"));
        assert!(!producto.matches_filter("7861"));
        assert_eq!(producto.label(), "SKU-1 - Aceite");
    }
}
