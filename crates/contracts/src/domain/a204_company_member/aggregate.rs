use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::a101_employee::Persona;
use crate::domain::a201_company::Empresa;
use crate::domain::common::{check_date_range, AggregateRoot};
use crate::shared::enrichment::{Lookup, NOT_AVAILABLE, UNKNOWN};
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata, FormWarning};
use crate::shared::search::Searchable;

/// Vínculo laboral de una persona con una empresa
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonaEmpresa {
    pub id: i64,
    pub persona_id: i64,
    pub empresa_id: i64,
    pub unidad_organizacional_id: Option<i64>,
    pub fecha_ingreso: String,
    pub fecha_salida: Option<String>,
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaEmpresaRequest {
    pub persona_id: i64,
    pub empresa_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unidad_organizacional_id: Option<i64>,
    pub fecha_ingreso: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_salida: Option<String>,
    pub activo: bool,
}

impl Default for PersonaEmpresaRequest {
    fn default() -> Self {
        Self {
            persona_id: 0,
            empresa_id: 0,
            unidad_organizacional_id: None,
            fecha_ingreso: String::new(),
            fecha_salida: None,
            activo: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaEmpresaDetalle {
    #[serde(flatten)]
    pub base: PersonaEmpresa,
    pub persona_nombre: String,
    pub persona_cedula: String,
    pub empresa_nombre: String,
    pub empresa_nit: String,
}

impl PersonaEmpresaDetalle {
    /// Etiqueta para selects de otras pantallas
    pub fn label(&self) -> String {
        format!("{} ({})", self.persona_nombre, self.empresa_nombre)
    }
}

pub fn enrich(
    vinculos: &[PersonaEmpresa],
    personas: &[Persona],
    empresas: &[Empresa],
) -> Vec<PersonaEmpresaDetalle> {
    let personas = Lookup::by(personas, |p| p.id);
    let empresas = Lookup::by(empresas, |e| e.id);
    vinculos
        .iter()
        .map(|v| PersonaEmpresaDetalle {
            base: v.clone(),
            persona_nombre: personas.text(Some(v.persona_id), |p| p.nombre.clone(), UNKNOWN),
            persona_cedula: personas.text(Some(v.persona_id), |p| p.cedula.clone(), NOT_AVAILABLE),
            empresa_nombre: empresas.text(Some(v.empresa_id), |e| e.nombre.clone(), UNKNOWN),
            empresa_nit: empresas.text(Some(v.empresa_id), |e| e.nit.clone(), NOT_AVAILABLE),
        })
        .collect()
}

impl Searchable for PersonaEmpresaDetalle {
    const SEARCH_FIELDS: &'static [&'static str] =
        &["personaNombre", "personaCedula", "empresaNombre", "empresaNit"];
}

impl AggregateRoot for PersonaEmpresaDetalle {
    type Request = PersonaEmpresaRequest;

    fn id(&self) -> Option<i64> {
        Some(self.base.id)
    }

    fn to_request(&self) -> PersonaEmpresaRequest {
        PersonaEmpresaRequest {
            persona_id: self.base.persona_id,
            empresa_id: self.base.empresa_id,
            unidad_organizacional_id: self.base.unidad_organizacional_id,
            fecha_ingreso: self.base.fecha_ingreso.clone(),
            fecha_salida: self.base.fecha_salida.clone(),
            activo: self.base.activo,
        }
    }

    fn display_name(&self) -> String {
        self.label()
    }

    fn entity_metadata_info() -> EntityMetadataInfo {
        ENTITY_METADATA
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn check(request: &PersonaEmpresaRequest) -> Result<(), FormWarning> {
        check_date_range(&request.fecha_ingreso, request.fecha_salida.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enrich() {
        let personas = vec![Persona {
            id: 3,
            nombre: "Ana".into(),
            cedula: "0102".into(),
            ..Persona::default()
        }];
        let empresas = vec![Empresa {
            id: 8,
            nombre: "Acme".into(),
            nit: "179".into(),
            ..Empresa::default()
        }];
        let vinculos = vec![PersonaEmpresa {
            id: 1,
            persona_id: 3,
            empresa_id: 8,
            ..PersonaEmpresa::default()
        }];
        let rows = enrich(&vinculos, &personas, &empresas);
        assert_eq!(rows[0].label(), "Ana (Acme)");
        assert_eq!(rows[0].empresa_nit, "179");
        assert!(rows[0].matches_filter("0102"));
    }

    #[test]
    fn test_new_member_defaults_active() {
        assert!(PersonaEmpresaRequest::default().activo);
    }

    #[test]
    fn test_exit_before_entry() {
        let request = PersonaEmpresaRequest {
            fecha_ingreso: "2024-02-01".into(),
            fecha_salida: Some("2024-01-01".into()),
            ..PersonaEmpresaRequest::default()
        };
        assert!(PersonaEmpresaDetalle::check(&request).is_err());
    }
}
