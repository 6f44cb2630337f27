use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::a204_company_member::PersonaEmpresaDetalle;
use crate::domain::a207_company_role::RolEmpresa;
use crate::domain::common::{check_date_range, AggregateRoot};
use crate::shared::enrichment::{Lookup, NOT_AVAILABLE, UNKNOWN};
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata, FormWarning};
use crate::shared::search::Searchable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonaEmpresaRol {
    pub id: i64,
    pub persona_empresa_id: i64,
    pub rol_empresa_id: i64,
    pub fecha_asignacion: String,
    pub fecha_fin: Option<String>,
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaEmpresaRolRequest {
    pub persona_empresa_id: i64,
    pub rol_empresa_id: i64,
    pub fecha_asignacion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_fin: Option<String>,
    pub activo: bool,
}

impl Default for PersonaEmpresaRolRequest {
    fn default() -> Self {
        Self {
            persona_empresa_id: 0,
            rol_empresa_id: 0,
            fecha_asignacion: String::new(),
            fecha_fin: None,
            activo: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaEmpresaRolDetalle {
    #[serde(flatten)]
    pub base: PersonaEmpresaRol,
    pub persona_nombre: String,
    pub persona_cedula: String,
    pub empresa_nombre: String,
    pub rol_nombre: String,
}

pub fn enrich(
    asignaciones: &[PersonaEmpresaRol],
    miembros: &[PersonaEmpresaDetalle],
    roles: &[RolEmpresa],
) -> Vec<PersonaEmpresaRolDetalle> {
    let miembros = Lookup::by(miembros, |m| m.base.id);
    let roles = Lookup::by(roles, |r| r.id);
    asignaciones
        .iter()
        .map(|a| {
            let miembro = Some(a.persona_empresa_id);
            PersonaEmpresaRolDetalle {
                base: a.clone(),
                persona_nombre: miembros.text(miembro, |m| m.persona_nombre.clone(), UNKNOWN),
                persona_cedula: miembros.text(miembro, |m| m.persona_cedula.clone(), NOT_AVAILABLE),
                empresa_nombre: miembros.text(miembro, |m| m.empresa_nombre.clone(), UNKNOWN),
                rol_nombre: roles.text(Some(a.rol_empresa_id), |r| r.nombre.clone(), UNKNOWN),
            }
        })
        .collect()
}

impl Searchable for PersonaEmpresaRolDetalle {
    const SEARCH_FIELDS: &'static [&'static str] =
        &["personaNombre", "personaCedula", "empresaNombre", "rolNombre"];
}

impl AggregateRoot for PersonaEmpresaRolDetalle {
    type Request = PersonaEmpresaRolRequest;

    fn id(&self) -> Option<i64> {
        Some(self.base.id)
    }

    fn to_request(&self) -> PersonaEmpresaRolRequest {
        PersonaEmpresaRolRequest {
            persona_empresa_id: self.base.persona_empresa_id,
            rol_empresa_id: self.base.rol_empresa_id,
            fecha_asignacion: self.base.fecha_asignacion.clone(),
            fecha_fin: self.base.fecha_fin.clone(),
            activo: self.base.activo,
        }
    }

    fn display_name(&self) -> String {
        format!("{} - {}", self.persona_nombre, self.rol_nombre)
    }

    fn entity_metadata_info() -> EntityMetadataInfo {
        ENTITY_METADATA
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn check(request: &PersonaEmpresaRolRequest) -> Result<(), FormWarning> {
        check_date_range(&request.fecha_asignacion, request.fecha_fin.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a204_company_member::PersonaEmpresa;

    #[test]
    fn test_enrich() {
        let miembros = vec![PersonaEmpresaDetalle {
            base: PersonaEmpresa {
                id: 5,
                ..PersonaEmpresa::default()
            },
            persona_nombre: "Luis".into(),
            persona_cedula: "0911".into(),
            empresa_nombre: "Acme".into(),
            empresa_nit: "179".into(),
        }];
        let roles = vec![RolEmpresa {
            id: 2,
            nombre: "Cajero".into(),
            ..RolEmpresa::default()
        }];
        let asignaciones = vec![PersonaEmpresaRol {
            id: 1,
            persona_empresa_id: 5,
            rol_empresa_id: 2,
            fecha_asignacion: "2024-01-01".into(),
            ..PersonaEmpresaRol::default()
        }];
        let rows = enrich(&asignaciones, &miembros, &roles);
        assert_eq!(rows[0].empresa_nombre, "Acme");
        assert_eq!(rows[0].display_name(), "Luis - Cajero");
        assert!(rows[0].matches_filter("cajero"));
    }

    #[test]
    fn test_edit_keeps_fields() {
        let row = PersonaEmpresaRolDetalle {
            base: PersonaEmpresaRol {
                id: 1,
                persona_empresa_id: 5,
                rol_empresa_id: 2,
                fecha_asignacion: "2024-01-01".into(),
                fecha_fin: Some("2024-06-30".into()),
                activo: false,
            },
            persona_nombre: String::new(),
            persona_cedula: String::new(),
            empresa_nombre: String::new(),
            rol_nombre: String::new(),
        };
        let request = row.to_request();
        assert_eq!(request.fecha_fin.as_deref(), Some("2024-06-30"));
        assert!(!request.activo);
        assert!(PersonaEmpresaRolDetalle::check(&request).is_ok());
    }
}
