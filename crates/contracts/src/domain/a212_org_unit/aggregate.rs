use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::a201_company::Empresa;
use crate::domain::common::AggregateRoot;
use crate::shared::enrichment::{Lookup, UNKNOWN};
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use crate::shared::search::Searchable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnidadOrganizacional {
    pub id: i64,
    pub nombre: String,
    pub tipo: String,
    pub empresa_id: i64,
    pub unidad_padre_id: Option<i64>,
    pub activo: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnidadOrganizacionalRequest {
    pub nombre: String,
    pub tipo: String,
    pub empresa_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unidad_padre_id: Option<i64>,
    pub activo: bool,
}

impl Default for UnidadOrganizacionalRequest {
    fn default() -> Self {
        Self {
            nombre: String::new(),
            tipo: String::new(),
            empresa_id: 0,
            unidad_padre_id: None,
            activo: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnidadOrganizacionalDetalle {
    #[serde(flatten)]
    pub base: UnidadOrganizacional,
    pub empresa_nombre: String,
    pub unidad_padre_nombre: String,
}

/// La unidad padre se busca en la misma lista
pub fn enrich(
    unidades: &[UnidadOrganizacional],
    empresas: &[Empresa],
) -> Vec<UnidadOrganizacionalDetalle> {
    let empresas = Lookup::by(empresas, |e| e.id);
    let padres = Lookup::by(unidades, |u| u.id);
    unidades
        .iter()
        .map(|u| UnidadOrganizacionalDetalle {
            base: u.clone(),
            empresa_nombre: empresas.text(Some(u.empresa_id), |e| e.nombre.clone(), UNKNOWN),
            unidad_padre_nombre: match u.unidad_padre_id {
                Some(_) => padres.text(u.unidad_padre_id, |p| p.nombre.clone(), UNKNOWN),
                None => String::new(),
            },
        })
        .collect()
}

impl Searchable for UnidadOrganizacionalDetalle {
    const SEARCH_FIELDS: &'static [&'static str] = &["nombre", "tipo", "empresaNombre"];
}

impl AggregateRoot for UnidadOrganizacionalDetalle {
    type Request = UnidadOrganizacionalRequest;

    fn id(&self) -> Option<i64> {
        Some(self.base.id)
    }

    fn to_request(&self) -> UnidadOrganizacionalRequest {
        UnidadOrganizacionalRequest {
            nombre: self.base.nombre.clone(),
            tipo: self.base.tipo.clone(),
            empresa_id: self.base.empresa_id,
            unidad_padre_id: self.base.unidad_padre_id,
            activo: self.base.activo.unwrap_or(true),
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

    #[test]
    fn test_enrich_parent_unit() {
        let empresas = vec![Empresa {
            id: 1,
            nombre: "Acme".into(),
            ..Empresa::default()
        }];
        let unidades = vec![
            UnidadOrganizacional {
                id: 1,
                nombre: "Gerencia".into(),
                tipo: "GERENCIA".into(),
                empresa_id: 1,
                ..UnidadOrganizacional::default()
            },
            UnidadOrganizacional {
                id: 2,
                nombre: "Ventas".into(),
                tipo: "DEPARTAMENTO".into(),
                empresa_id: 1,
                unidad_padre_id: Some(1),
                activo: None,
            },
        ];
        let rows = enrich(&unidades, &empresas);
        assert_eq!(rows[1].unidad_padre_nombre, "Gerencia");
        assert_eq!(rows[0].unidad_padre_nombre, "");
        assert!(rows[1].matches_filter("departamento"));
        // sin bandera del servidor se edita como activa
        assert!(rows[1].to_request().activo);
    }
}
