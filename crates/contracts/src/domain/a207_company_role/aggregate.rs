use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::a201_company::Empresa;
use crate::domain::common::AggregateRoot;
use crate::shared::enrichment::{Lookup, NOT_AVAILABLE, UNKNOWN};
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use crate::shared::search::Searchable;

/// Rol dentro de una empresa, opcionalmente colgado de un rol padre
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RolEmpresa {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub empresa_id: i64,
    pub rol_padre_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolEmpresaRequest {
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub empresa_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rol_padre_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RolEmpresaDetalle {
    #[serde(flatten)]
    pub base: RolEmpresa,
    pub empresa_nombre: String,
    pub empresa_nit: String,
    /// Vacío para los roles raíz
    pub rol_padre_nombre: String,
}

impl RolEmpresaDetalle {
    pub fn label(&self) -> String {
        format!("{} ({})", self.base.nombre, self.empresa_nombre)
    }
}

/// El rol padre se resuelve contra la misma lista de roles
pub fn enrich(roles: &[RolEmpresa], empresas: &[Empresa]) -> Vec<RolEmpresaDetalle> {
    let empresas = Lookup::by(empresas, |e| e.id);
    let padres = Lookup::by(roles, |r| r.id);
    roles
        .iter()
        .map(|r| RolEmpresaDetalle {
            base: r.clone(),
            empresa_nombre: empresas.text(Some(r.empresa_id), |e| e.nombre.clone(), UNKNOWN),
            empresa_nit: empresas.text(Some(r.empresa_id), |e| e.nit.clone(), NOT_AVAILABLE),
            rol_padre_nombre: match r.rol_padre_id {
                Some(_) => padres.text(r.rol_padre_id, |p| p.nombre.clone(), UNKNOWN),
                None => String::new(),
            },
        })
        .collect()
}

impl Searchable for RolEmpresaDetalle {
    const SEARCH_FIELDS: &'static [&'static str] = &["nombre", "descripcion", "empresaNombre"];
}

impl AggregateRoot for RolEmpresaDetalle {
    type Request = RolEmpresaRequest;

    fn id(&self) -> Option<i64> {
        Some(self.base.id)
    }

    fn to_request(&self) -> RolEmpresaRequest {
        RolEmpresaRequest {
            nombre: self.base.nombre.clone(),
            descripcion: self.base.descripcion.clone(),
            empresa_id: self.base.empresa_id,
            rol_padre_id: self.base.rol_padre_id,
        }
    }

    fn display_name(&self) -> String {
        self.base.nombre.clone()
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

    fn rol(id: i64, nombre: &str, padre: Option<i64>) -> RolEmpresa {
        RolEmpresa {
            id,
            nombre: nombre.into(),
            empresa_id: 1,
            rol_padre_id: padre,
            ..RolEmpresa::default()
        }
    }

    #[test]
    fn test_enrich_resolves_parent_from_same_list() {
        let empresas = vec![Empresa {
            id: 1,
            nombre: "Acme".into(),
            ..Empresa::default()
        }];
        let roles = vec![
            rol(1, "Gerente", None),
            rol(2, "Supervisor", Some(1)),
            rol(3, "Huérfano", Some(99)),
        ];
        let rows = enrich(&roles, &empresas);
        assert_eq!(rows[0].rol_padre_nombre, "");
        assert_eq!(rows[1].rol_padre_nombre, "Gerente");
        assert_eq!(rows[2].rol_padre_nombre, UNKNOWN);
        assert_eq!(rows[1].label(), "Supervisor (Acme)");
    }

    #[test]
    fn test_request_skips_empty_optionals() {
        let raiz = rol(2, "Supervisor", None);
        let request = enrich(&[raiz], &[])[0].to_request();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"nombre": "Supervisor", "empresaId": 1}));
    }
}
