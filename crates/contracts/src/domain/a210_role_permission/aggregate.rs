use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::a206_process_action::AccionProcesoDetalle;
use crate::domain::a207_company_role::RolEmpresaDetalle;
use crate::domain::common::AggregateRoot;
use crate::shared::enrichment::{Lookup, NOT_AVAILABLE, UNKNOWN};
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use crate::shared::search::Searchable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RolProcesoPermiso {
    pub id: i64,
    pub rol_empresa_id: i64,
    pub accion_proceso_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolProcesoPermisoRequest {
    pub rol_empresa_id: i64,
    pub accion_proceso_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RolProcesoPermisoDetalle {
    #[serde(flatten)]
    pub base: RolProcesoPermiso,
    pub rol_nombre: String,
    pub empresa_nombre: String,
    pub accion_proceso_codigo: String,
    pub proceso_nombre: String,
}

pub fn enrich(
    permisos: &[RolProcesoPermiso],
    roles: &[RolEmpresaDetalle],
    acciones: &[AccionProcesoDetalle],
) -> Vec<RolProcesoPermisoDetalle> {
    let roles = Lookup::by(roles, |r| r.base.id);
    let acciones = Lookup::by(acciones, |a| a.base.id);
    permisos
        .iter()
        .map(|p| {
            let rol = Some(p.rol_empresa_id);
            let accion = Some(p.accion_proceso_id);
            RolProcesoPermisoDetalle {
                base: p.clone(),
                rol_nombre: roles.text(rol, |r| r.base.nombre.clone(), UNKNOWN),
                empresa_nombre: roles.text(rol, |r| r.empresa_nombre.clone(), NOT_AVAILABLE),
                accion_proceso_codigo: acciones.text(accion, |a| a.base.codigo.clone(), UNKNOWN),
                proceso_nombre: acciones.text(accion, |a| a.proceso_nombre.clone(), NOT_AVAILABLE),
            }
        })
        .collect()
}

impl Searchable for RolProcesoPermisoDetalle {
    const SEARCH_FIELDS: &'static [&'static str] =
        &["rolNombre", "accionProcesoCodigo", "empresaNombre", "procesoNombre"];
}

impl AggregateRoot for RolProcesoPermisoDetalle {
    type Request = RolProcesoPermisoRequest;

    fn id(&self) -> Option<i64> {
        Some(self.base.id)
    }

    fn to_request(&self) -> RolProcesoPermisoRequest {
        RolProcesoPermisoRequest {
            rol_empresa_id: self.base.rol_empresa_id,
            accion_proceso_id: self.base.accion_proceso_id,
        }
    }

    fn display_name(&self) -> String {
        format!("{} de {}", self.accion_proceso_codigo, self.rol_nombre)
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
    use crate::domain::a206_process_action::AccionProceso;
    use crate::domain::a207_company_role::RolEmpresa;

    #[test]
    fn test_enrich_unknown_role() {
        let acciones = vec![AccionProcesoDetalle {
            base: AccionProceso {
                id: 3,
                codigo: "VER".into(),
                proceso_id: 1,
            },
            proceso_nombre: "Ventas".into(),
            proceso_codigo: "VEN".into(),
        }];
        let roles = vec![RolEmpresaDetalle {
            base: RolEmpresa {
                id: 4,
                nombre: "Vendedor".into(),
                ..RolEmpresa::default()
            },
            empresa_nombre: "Acme".into(),
            empresa_nit: "179".into(),
            rol_padre_nombre: String::new(),
        }];
        let permisos = vec![
            RolProcesoPermiso {
                id: 1,
                rol_empresa_id: 4,
                accion_proceso_id: 3,
            },
            RolProcesoPermiso {
                id: 2,
                rol_empresa_id: 40,
                accion_proceso_id: 3,
            },
        ];
        let rows = enrich(&permisos, &roles, &acciones);
        assert_eq!(rows[0].empresa_nombre, "Acme");
        assert_eq!(rows[1].rol_nombre, UNKNOWN);
        assert_eq!(rows[1].empresa_nombre, NOT_AVAILABLE);
        assert_eq!(rows[1].proceso_nombre, "Ventas");
    }
}
