use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::a407_customer::Cliente;
use crate::domain::common::AggregateRoot;
use crate::shared::enrichment::{Lookup, UNKNOWN};
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use crate::shared::search::Searchable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactoCliente {
    pub id: i64,
    pub cliente_id: i64,
    pub cliente_nombre: Option<String>,
    pub nombres: String,
    pub apellidos: String,
    pub nombre_completo: Option<String>,
    pub area: Option<String>,
    pub cargo: Option<String>,
    pub telefono: Option<String>,
    pub celular: Option<String>,
    pub email: Option<String>,
    pub es_principal: bool,
    pub recibe_facturas: bool,
    pub recibe_cotizaciones: bool,
    pub observaciones: Option<String>,
    pub activo: Option<bool>,
    pub tiene_contacto_valido: Option<bool>,
    pub fecha_creacion: Option<String>,
    pub fecha_modificacion: Option<String>,
}

impl ContactoCliente {
    pub fn nombre_completo(&self) -> String {
        match self.nombre_completo.as_deref() {
            Some(nombre) if !nombre.trim().is_empty() => nombre.to_string(),
            _ => format!("{} {}", self.nombres, self.apellidos).trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactoClienteRequest {
    pub cliente_id: i64,
    pub nombres: String,
    pub apellidos: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub celular: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub es_principal: bool,
    pub recibe_facturas: bool,
    pub recibe_cotizaciones: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
}

/// Completa `clienteNombre` cuando el backend no lo envía
pub fn enrich(contactos: Vec<ContactoCliente>, clientes: &[Cliente]) -> Vec<ContactoCliente> {
    let clientes = Lookup::by(clientes, |c| c.id);
    contactos
        .into_iter()
        .map(|mut c| {
            if c.cliente_nombre.as_deref().map_or(true, |n| n.trim().is_empty()) {
                c.cliente_nombre =
                    Some(clientes.text(Some(c.cliente_id), Cliente::nombre_visible, UNKNOWN));
            }
            c
        })
        .collect()
}

impl Searchable for ContactoCliente {
    const SEARCH_FIELDS: &'static [&'static str] =
        &["nombres", "apellidos", "email", "cargo", "area", "clienteNombre"];
}

impl AggregateRoot for ContactoCliente {
    type Request = ContactoClienteRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> ContactoClienteRequest {
        ContactoClienteRequest {
            cliente_id: self.cliente_id,
            nombres: self.nombres.clone(),
            apellidos: self.apellidos.clone(),
            area: self.area.clone(),
            cargo: self.cargo.clone(),
            telefono: self.telefono.clone(),
            celular: self.celular.clone(),
            email: self.email.clone(),
            es_principal: self.es_principal,
            recibe_facturas: self.recibe_facturas,
            recibe_cotizaciones: self.recibe_cotizaciones,
            observaciones: self.observaciones.clone(),
        }
    }

    fn display_name(&self) -> String {
        self.nombre_completo()
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
    use crate::shared::search::filter_list;

    #[test]
    fn test_enrich_fills_missing_client_names() {
        let clientes = vec![Cliente {
            id: 4,
            nombre_comercial: Some("Ferretería Sur".into()),
            ..Cliente::default()
        }];
        let contactos = vec![
            ContactoCliente {
                id: 1,
                cliente_id: 4,
                nombres: "Rosa".into(),
                apellidos: "Vega".into(),
                ..ContactoCliente::default()
            },
            ContactoCliente {
                id: 2,
                cliente_id: 4,
                cliente_nombre: Some("Nombre del backend".into()),
                ..ContactoCliente::default()
            },
            ContactoCliente {
                id: 3,
                cliente_id: 8,
                ..ContactoCliente::default()
            },
        ];
        let rows = enrich(contactos, &clientes);
        assert_eq!(rows[0].cliente_nombre.as_deref(), Some("Ferretería Sur"));
        assert_eq!(rows[1].cliente_nombre.as_deref(), Some("Nombre del backend"));
        assert_eq!(rows[2].cliente_nombre.as_deref(), Some(UNKNOWN));
        assert_eq!(rows[0].display_name(), "Rosa Vega");

        let found = filter_list(&rows, "ferre");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }
}
