use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::a204_company_member::PersonaEmpresaDetalle;
use crate::domain::a206_process_action::AccionProcesoDetalle;
use crate::domain::common::{check_date_range, AggregateRoot};
use crate::shared::enrichment::{Lookup, NOT_AVAILABLE, UNKNOWN};
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata, FormWarning};
use crate::shared::search::Searchable;

/// Permiso concedido a una persona fuera de sus roles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PermisoDirectoPersonal {
    pub id: i64,
    pub persona_empresa_id: i64,
    pub accion_proceso_id: i64,
    pub fecha_inicio: String,
    pub fecha_fin: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermisoDirectoPersonalRequest {
    pub persona_empresa_id: i64,
    pub accion_proceso_id: i64,
    pub fecha_inicio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_fin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermisoDirectoPersonalDetalle {
    #[serde(flatten)]
    pub base: PermisoDirectoPersonal,
    pub persona_nombre: String,
    pub persona_cedula: String,
    pub empresa_nombre: String,
    pub accion_proceso_codigo: String,
    pub proceso_nombre: String,
}

pub fn enrich(
    permisos: &[PermisoDirectoPersonal],
    miembros: &[PersonaEmpresaDetalle],
    acciones: &[AccionProcesoDetalle],
) -> Vec<PermisoDirectoPersonalDetalle> {
    let miembros = Lookup::by(miembros, |m| m.base.id);
    let acciones = Lookup::by(acciones, |a| a.base.id);
    permisos
        .iter()
        .map(|p| {
            let miembro = Some(p.persona_empresa_id);
            let accion = Some(p.accion_proceso_id);
            PermisoDirectoPersonalDetalle {
                base: p.clone(),
                persona_nombre: miembros.text(miembro, |m| m.persona_nombre.clone(), UNKNOWN),
                persona_cedula: miembros.text(miembro, |m| m.persona_cedula.clone(), NOT_AVAILABLE),
                empresa_nombre: miembros.text(miembro, |m| m.empresa_nombre.clone(), UNKNOWN),
                accion_proceso_codigo: acciones.text(accion, |a| a.base.codigo.clone(), UNKNOWN),
                proceso_nombre: acciones.text(accion, |a| a.proceso_nombre.clone(), NOT_AVAILABLE),
            }
        })
        .collect()
}

impl Searchable for PermisoDirectoPersonalDetalle {
    const SEARCH_FIELDS: &'static [&'static str] =
        &["personaNombre", "personaCedula", "accionProcesoCodigo", "procesoNombre"];
}

impl AggregateRoot for PermisoDirectoPersonalDetalle {
    type Request = PermisoDirectoPersonalRequest;

    fn id(&self) -> Option<i64> {
        Some(self.base.id)
    }

    fn to_request(&self) -> PermisoDirectoPersonalRequest {
        PermisoDirectoPersonalRequest {
            persona_empresa_id: self.base.persona_empresa_id,
            accion_proceso_id: self.base.accion_proceso_id,
            fecha_inicio: self.base.fecha_inicio.clone(),
            fecha_fin: self.base.fecha_fin.clone(),
        }
    }

    fn display_name(&self) -> String {
        format!("{} de {}", self.accion_proceso_codigo, self.persona_nombre)
    }

    fn entity_metadata_info() -> EntityMetadataInfo {
        ENTITY_METADATA
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn check(request: &PermisoDirectoPersonalRequest) -> Result<(), FormWarning> {
        check_date_range(&request.fecha_inicio, request.fecha_fin.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a204_company_member::PersonaEmpresa;
    use crate::domain::a206_process_action::AccionProceso;

    #[test]
    fn test_enrich_with_action_process() {
        let miembros = vec![PersonaEmpresaDetalle {
            base: PersonaEmpresa {
                id: 7,
                ..PersonaEmpresa::default()
            },
            persona_nombre: "Marta".into(),
            persona_cedula: "1717".into(),
            empresa_nombre: "Acme".into(),
            empresa_nit: "179".into(),
        }];
        let acciones = vec![AccionProcesoDetalle {
            base: AccionProceso {
                id: 3,
                codigo: "APROBAR".into(),
                proceso_id: 1,
            },
            proceso_nombre: "Compras".into(),
            proceso_codigo: "COM".into(),
        }];
        let permisos = vec![PermisoDirectoPersonal {
            id: 1,
            persona_empresa_id: 7,
            accion_proceso_id: 3,
            fecha_inicio: "2024-01-01".into(),
            fecha_fin: None,
        }];
        let rows = enrich(&permisos, &miembros, &acciones);
        assert_eq!(rows[0].proceso_nombre, "Compras");
        assert_eq!(rows[0].display_name(), "APROBAR de Marta");
        assert!(rows[0].matches_filter("compras"));
    }

    #[test]
    fn test_date_range_warning() {
        let request = PermisoDirectoPersonalRequest {
            fecha_inicio: "2024-05-01".into(),
            fecha_fin: Some("2024-04-30".into()),
            ..PermisoDirectoPersonalRequest::default()
        };
        assert!(PermisoDirectoPersonalDetalle::check(&request).is_err());
    }
}
