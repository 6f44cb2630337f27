use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::common::AggregateRoot;
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use crate::shared::search::Searchable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cliente {
    pub id: i64,
    pub tipo_identificacion: String,
    pub numero_identificacion: String,
    pub razon_social: Option<String>,
    pub nombre_comercial: Option<String>,
    pub nombres: Option<String>,
    pub apellidos: Option<String>,
    pub tipo_cliente_id: Option<i64>,
    pub tipo_cliente_nombre: Option<String>,
    pub zona_venta_id: Option<i64>,
    pub zona_venta_nombre: Option<String>,
    pub vendedor_id: Option<i64>,
    pub segmento: Option<String>,
    pub categoria: Option<String>,
    pub lista_precios_id: Option<i64>,
    pub condicion_pago_id: Option<i64>,
    pub limite_credito: f64,
    pub descuento_general: f64,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub celular: Option<String>,
    pub direccion: Option<String>,
    pub ciudad: Option<String>,
    pub provincia: Option<String>,
    pub pais: Option<String>,
    pub codigo_postal: Option<String>,
    pub observaciones: Option<String>,
    pub activo: bool,
    pub fecha_creacion: Option<String>,
    pub fecha_modificacion: Option<String>,
}

fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl Cliente {
    /// Razón social, nombre comercial o nombres y apellidos, en ese orden
    pub fn nombre_visible(&self) -> String {
        if let Some(razon) = filled(&self.razon_social) {
            return razon.to_string();
        }
        if let Some(comercial) = filled(&self.nombre_comercial) {
            return comercial.to_string();
        }
        format!(
            "{} {}",
            self.nombres.as_deref().unwrap_or_default(),
            self.apellidos.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string()
    }

    /// Texto del cliente en selects: "IDENTIFICACION - Nombre"
    pub fn label(&self) -> String {
        format!("{} - {}", self.numero_identificacion, self.nombre_visible())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteRequest {
    pub tipo_identificacion: String,
    pub numero_identificacion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub razon_social: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre_comercial: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombres: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apellidos: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo_cliente_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zona_venta_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendedor_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segmento: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lista_precios_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condicion_pago_id: Option<i64>,
    pub limite_credito: f64,
    pub descuento_general: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub celular: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ciudad: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provincia: Option<String>,
    pub pais: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codigo_postal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
}

impl Default for ClienteRequest {
    fn default() -> Self {
        Self {
            tipo_identificacion: "RUC".to_string(),
            numero_identificacion: String::new(),
            razon_social: None,
            nombre_comercial: None,
            nombres: None,
            apellidos: None,
            tipo_cliente_id: None,
            zona_venta_id: None,
            vendedor_id: None,
            segmento: None,
            categoria: None,
            lista_precios_id: None,
            condicion_pago_id: None,
            limite_credito: 0.0,
            descuento_general: 0.0,
            email: None,
            telefono: None,
            celular: None,
            direccion: None,
            ciudad: None,
            provincia: None,
            pais: "Ecuador".to_string(),
            codigo_postal: None,
            observaciones: None,
        }
    }
}

impl Searchable for Cliente {
    const SEARCH_FIELDS: &'static [&'static str] = &[
        "numeroIdentificacion",
        "razonSocial",
        "nombreComercial",
        "nombres",
        "apellidos",
        "email",
    ];
}

impl AggregateRoot for Cliente {
    type Request = ClienteRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> ClienteRequest {
        ClienteRequest {
            tipo_identificacion: self.tipo_identificacion.clone(),
            numero_identificacion: self.numero_identificacion.clone(),
            razon_social: self.razon_social.clone(),
            nombre_comercial: self.nombre_comercial.clone(),
            nombres: self.nombres.clone(),
            apellidos: self.apellidos.clone(),
            tipo_cliente_id: self.tipo_cliente_id,
            zona_venta_id: self.zona_venta_id,
            vendedor_id: self.vendedor_id,
            segmento: self.segmento.clone(),
            categoria: self.categoria.clone(),
            lista_precios_id: self.lista_precios_id,
            condicion_pago_id: self.condicion_pago_id,
            limite_credito: self.limite_credito,
            descuento_general: self.descuento_general,
            email: self.email.clone(),
            telefono: self.telefono.clone(),
            celular: self.celular.clone(),
            direccion: self.direccion.clone(),
            ciudad: self.ciudad.clone(),
            provincia: self.provincia.clone(),
            pais: self.pais.clone().unwrap_or_else(|| "Ecuador".to_string()),
            codigo_postal: self.codigo_postal.clone(),
            observaciones: self.observaciones.clone(),
        }
    }

    fn display_name(&self) -> String {
        self.nombre_visible()
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
    fn test_nombre_visible_precedence() {
        let mut cliente = Cliente {
            razon_social: Some("Comercial Andina S.A.".into()),
            nombre_comercial: Some("Andina".into()),
            nombres: Some("Luis".into()),
            apellidos: Some("Mora".into()),
            ..Cliente::default()
        };
        assert_eq!(cliente.nombre_visible(), "Comercial Andina S.A.");
        cliente.razon_social = Some("  ".into());
        assert_eq!(cliente.nombre_visible(), "Andina");
        cliente.nombre_comercial = None;
        assert_eq!(cliente.nombre_visible(), "Luis Mora");
        cliente.apellidos = None;
        assert_eq!(cliente.nombre_visible(), "Luis");
    }

    #[test]
    fn test_defaults_and_rules() {
        let request = ClienteRequest::default();
        assert_eq!(request.tipo_identificacion, "RUC");
        assert_eq!(request.pais, "Ecuador");

        let request = ClienteRequest {
            numero_identificacion: "1234".into(),
            email: Some("no-es-correo".into()),
            ..ClienteRequest::default()
        };
        let errors = validate_form(&request, FIELDS);
        assert_eq!(
            errors.get("numeroIdentificacion").map(String::as_str),
            Some("Debe tener al menos 8 caracteres")
        );
        assert_eq!(errors.get("email").map(String::as_str), Some("Email inválido"));

        let request = ClienteRequest {
            numero_identificacion: "1790012345001".into(),
            ..ClienteRequest::default()
        };
        assert!(validate_form(&request, FIELDS).is_empty());
    }
}
