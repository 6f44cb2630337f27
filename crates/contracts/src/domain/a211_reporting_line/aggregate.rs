use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::a204_company_member::PersonaEmpresaDetalle;
use crate::domain::common::{check_date_range, AggregateRoot};
use crate::shared::enrichment::{Lookup, NOT_AVAILABLE, UNKNOWN};
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata, FormWarning};
use crate::shared::search::Searchable;

/// Relación jefe/subordinado entre dos vínculos persona-empresa
///
/// El backend ya devuelve nombres y cédulas; `enrich` sólo completa los que
/// lleguen vacíos.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReporteJerarquico {
    pub id: i64,
    pub subordinado_id: i64,
    pub subordinado_nombre: Option<String>,
    pub subordinado_cedula: Option<String>,
    pub jefe_id: i64,
    pub jefe_nombre: Option<String>,
    pub jefe_cedula: Option<String>,
    pub fecha_inicio: String,
    pub fecha_fin: Option<String>,
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReporteJerarquicoRequest {
    pub subordinado_id: i64,
    pub jefe_id: i64,
    pub fecha_inicio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_fin: Option<String>,
    pub activo: bool,
}

impl Default for ReporteJerarquicoRequest {
    fn default() -> Self {
        Self {
            subordinado_id: 0,
            jefe_id: 0,
            fecha_inicio: String::new(),
            fecha_fin: None,
            activo: true,
        }
    }
}

fn fill(current: Option<String>, lookup: impl FnOnce() -> String) -> Option<String> {
    match current {
        Some(text) if !text.trim().is_empty() => Some(text),
        _ => Some(lookup()),
    }
}

pub fn enrich(
    reportes: Vec<ReporteJerarquico>,
    miembros: &[PersonaEmpresaDetalle],
) -> Vec<ReporteJerarquico> {
    let miembros = Lookup::by(miembros, |m| m.base.id);
    reportes
        .into_iter()
        .map(|r| {
            let sub = Some(r.subordinado_id);
            let jefe = Some(r.jefe_id);
            ReporteJerarquico {
                subordinado_nombre: fill(r.subordinado_nombre, || {
                    miembros.text(sub, |m| m.persona_nombre.clone(), UNKNOWN)
                }),
                subordinado_cedula: fill(r.subordinado_cedula, || {
                    miembros.text(sub, |m| m.persona_cedula.clone(), NOT_AVAILABLE)
                }),
                jefe_nombre: fill(r.jefe_nombre, || {
                    miembros.text(jefe, |m| m.persona_nombre.clone(), UNKNOWN)
                }),
                jefe_cedula: fill(r.jefe_cedula, || {
                    miembros.text(jefe, |m| m.persona_cedula.clone(), NOT_AVAILABLE)
                }),
                ..r
            }
        })
        .collect()
}

impl Searchable for ReporteJerarquico {
    const SEARCH_FIELDS: &'static [&'static str] =
        &["subordinadoNombre", "subordinadoCedula", "jefeNombre", "jefeCedula"];
}

impl AggregateRoot for ReporteJerarquico {
    type Request = ReporteJerarquicoRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> ReporteJerarquicoRequest {
        ReporteJerarquicoRequest {
            subordinado_id: self.subordinado_id,
            jefe_id: self.jefe_id,
            fecha_inicio: self.fecha_inicio.clone(),
            fecha_fin: self.fecha_fin.clone(),
            activo: self.activo,
        }
    }

    fn display_name(&self) -> String {
        format!(
            "{} → {}",
            self.subordinado_nombre.as_deref().unwrap_or(UNKNOWN),
            self.jefe_nombre.as_deref().unwrap_or(UNKNOWN)
        )
    }

    fn entity_metadata_info() -> EntityMetadataInfo {
        ENTITY_METADATA
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn check(request: &ReporteJerarquicoRequest) -> Result<(), FormWarning> {
        check_date_range(&request.fecha_inicio, request.fecha_fin.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a204_company_member::PersonaEmpresa;

    fn miembro(id: i64, nombre: &str) -> PersonaEmpresaDetalle {
        PersonaEmpresaDetalle {
            base: PersonaEmpresa {
                id,
                ..PersonaEmpresa::default()
            },
            persona_nombre: nombre.into(),
            persona_cedula: format!("ced-{id}"),
            empresa_nombre: "Acme".into(),
            empresa_nit: "179".into(),
        }
    }

    #[test]
    fn test_enrich_keeps_backend_names() {
        let reportes = vec![ReporteJerarquico {
            id: 1,
            subordinado_id: 1,
            subordinado_nombre: Some("Del servidor".into()),
            jefe_id: 2,
            ..ReporteJerarquico::default()
        }];
        let rows = enrich(reportes, &[miembro(1, "Ana"), miembro(2, "Beto")]);
        assert_eq!(rows[0].subordinado_nombre.as_deref(), Some("Del servidor"));
        assert_eq!(rows[0].subordinado_cedula.as_deref(), Some("ced-1"));
        assert_eq!(rows[0].jefe_nombre.as_deref(), Some("Beto"));
        assert_eq!(rows[0].display_name(), "Del servidor → Beto");
    }

    #[test]
    fn test_wire_format() {
        let json = r#"{"id":3,"subordinadoId":1,"jefeId":2,"fechaInicio":"2024-01-01","activo":true}"#;
        let reporte: ReporteJerarquico = serde_json::from_str(json).unwrap();
        assert_eq!(reporte.jefe_nombre, None);
        let body = serde_json::to_value(reporte.to_request()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "subordinadoId": 1,
                "jefeId": 2,
                "fechaInicio": "2024-01-01",
                "activo": true
            })
        );
    }
}
