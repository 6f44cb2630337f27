use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS, TIPOS_DIRECCION};
use crate::domain::a407_customer::Cliente;
use crate::domain::common::AggregateRoot;
use crate::shared::enrichment::{Lookup, UNKNOWN};
use crate::shared::metadata::{EntityMetadataInfo, FieldKind, FieldMetadata};
use crate::shared::search::Searchable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DireccionCliente {
    pub id: i64,
    pub cliente_id: i64,
    pub cliente_nombre: Option<String>,
    pub tipo_direccion: Option<String>,
    pub nombre_direccion: Option<String>,
    pub direccion: String,
    pub ciudad: Option<String>,
    pub provincia: Option<String>,
    pub codigo_postal: Option<String>,
    pub referencia: Option<String>,
    pub contacto: Option<String>,
    pub telefono: Option<String>,
    pub es_principal: bool,
    pub activo: Option<bool>,
    pub fecha_creacion: Option<String>,
    pub fecha_modificacion: Option<String>,
    pub direccion_completa: Option<String>,
}

impl DireccionCliente {
    pub fn tipo_direccion_label(&self) -> String {
        let tipo = self.tipo_direccion.as_deref().unwrap_or_default();
        FieldKind::Choice(TIPOS_DIRECCION)
            .choice_label(tipo)
            .unwrap_or(tipo)
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DireccionClienteRequest {
    pub cliente_id: i64,
    pub tipo_direccion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre_direccion: Option<String>,
    pub direccion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ciudad: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provincia: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codigo_postal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referencia: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacto: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    pub es_principal: bool,
    pub activo: bool,
}

impl Default for DireccionClienteRequest {
    fn default() -> Self {
        Self {
            cliente_id: 0,
            tipo_direccion: "AMBAS".to_string(),
            nombre_direccion: None,
            direccion: String::new(),
            ciudad: None,
            provincia: None,
            codigo_postal: None,
            referencia: None,
            contacto: None,
            telefono: None,
            es_principal: false,
            activo: true,
        }
    }
}

/// Completa `clienteNombre` cuando el backend no lo envía
pub fn enrich(direcciones: Vec<DireccionCliente>, clientes: &[Cliente]) -> Vec<DireccionCliente> {
    let clientes = Lookup::by(clientes, |c| c.id);
    direcciones
        .into_iter()
        .map(|mut d| {
            if d.cliente_nombre.as_deref().map_or(true, |n| n.trim().is_empty()) {
                d.cliente_nombre =
                    Some(clientes.text(Some(d.cliente_id), Cliente::nombre_visible, UNKNOWN));
            }
            d
        })
        .collect()
}

impl Searchable for DireccionCliente {
    const SEARCH_FIELDS: &'static [&'static str] =
        &["direccion", "ciudad", "provincia", "nombreDireccion", "clienteNombre"];
}

impl AggregateRoot for DireccionCliente {
    type Request = DireccionClienteRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> DireccionClienteRequest {
        DireccionClienteRequest {
            cliente_id: self.cliente_id,
            tipo_direccion: self
                .tipo_direccion
                .clone()
                .unwrap_or_else(|| "AMBAS".to_string()),
            nombre_direccion: self.nombre_direccion.clone(),
            direccion: self.direccion.clone(),
            ciudad: self.ciudad.clone(),
            provincia: self.provincia.clone(),
            codigo_postal: self.codigo_postal.clone(),
            referencia: self.referencia.clone(),
            contacto: self.contacto.clone(),
            telefono: self.telefono.clone(),
            es_principal: self.es_principal,
            activo: self.activo.unwrap_or(true),
        }
    }

    fn display_name(&self) -> String {
        match self.nombre_direccion.as_deref() {
            Some(nombre) if !nombre.trim().is_empty() => nombre.to_string(),
            _ => self.direccion.clone(),
        }
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

    #[test]
    fn test_defaults_and_type_label() {
        assert_eq!(DireccionClienteRequest::default().tipo_direccion, "AMBAS");
        let direccion = DireccionCliente {
            tipo_direccion: Some("ENVIO".into()),
            direccion: "Av. Amazonas 123".into(),
            ..DireccionCliente::default()
        };
        assert_eq!(direccion.tipo_direccion_label(), "Envío");
        assert_eq!(direccion.display_name(), "Av. Amazonas 123");
        assert!(direccion.to_request().activo);
    }

    #[test]
    fn test_enrich_client_name() {
        let clientes = vec![Cliente {
            id: 1,
            nombres: Some("Ana".into()),
            apellidos: Some("Ruiz".into()),
            ..Cliente::default()
        }];
        let rows = enrich(
            vec![DireccionCliente {
                cliente_id: 1,
                ..DireccionCliente::default()
            }],
            &clientes,
        );
        assert_eq!(rows[0].cliente_nombre.as_deref(), Some("Ana Ruiz"));
    }
}
