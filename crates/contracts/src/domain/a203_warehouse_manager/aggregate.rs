use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::a202_warehouse::Bodega;
use crate::domain::a204_company_member::PersonaEmpresaDetalle;
use crate::domain::common::{check_date_range, AggregateRoot};
use crate::shared::enrichment::{Lookup, NOT_AVAILABLE, UNKNOWN};
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata, FormWarning};
use crate::shared::search::Searchable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BodegaResponsable {
    pub id: i64,
    pub bodega_id: i64,
    pub persona_empresa_id: i64,
    pub fecha_inicio: String,
    pub fecha_fin: Option<String>,
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodegaResponsableRequest {
    pub bodega_id: i64,
    pub persona_empresa_id: i64,
    pub fecha_inicio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_fin: Option<String>,
    pub activo: bool,
}

impl Default for BodegaResponsableRequest {
    fn default() -> Self {
        Self {
            bodega_id: 0,
            persona_empresa_id: 0,
            fecha_inicio: String::new(),
            fecha_fin: None,
            activo: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodegaResponsableDetalle {
    #[serde(flatten)]
    pub base: BodegaResponsable,
    pub bodega_nombre: String,
    pub bodega_codigo: String,
    pub persona_nombre: String,
    pub persona_cedula: String,
}

/// Resuelve bodega y persona (a través del vínculo persona-empresa)
pub fn enrich(
    asignaciones: &[BodegaResponsable],
    bodegas: &[Bodega],
    miembros: &[PersonaEmpresaDetalle],
) -> Vec<BodegaResponsableDetalle> {
    let bodegas = Lookup::by(bodegas, |b| b.id);
    let miembros = Lookup::by(miembros, |m| m.base.id);
    asignaciones
        .iter()
        .map(|a| {
            let bodega = Some(a.bodega_id);
            let miembro = Some(a.persona_empresa_id);
            BodegaResponsableDetalle {
                base: a.clone(),
                bodega_nombre: bodegas.text(bodega, |b| b.nombre.clone(), UNKNOWN),
                bodega_codigo: bodegas.text(bodega, |b| b.codigo.clone(), NOT_AVAILABLE),
                persona_nombre: miembros.text(miembro, |m| m.persona_nombre.clone(), UNKNOWN),
                persona_cedula: miembros.text(miembro, |m| m.persona_cedula.clone(), NOT_AVAILABLE),
            }
        })
        .collect()
}

impl Searchable for BodegaResponsableDetalle {
    const SEARCH_FIELDS: &'static [&'static str] =
        &["bodegaNombre", "bodegaCodigo", "personaNombre", "personaCedula"];
}

impl AggregateRoot for BodegaResponsableDetalle {
    type Request = BodegaResponsableRequest;

    fn id(&self) -> Option<i64> {
        Some(self.base.id)
    }

    fn to_request(&self) -> BodegaResponsableRequest {
        BodegaResponsableRequest {
            bodega_id: self.base.bodega_id,
            persona_empresa_id: self.base.persona_empresa_id,
            fecha_inicio: self.base.fecha_inicio.clone(),
            fecha_fin: self.base.fecha_fin.clone(),
            activo: self.base.activo,
        }
    }

    fn display_name(&self) -> String {
        format!("{} - {}", self.bodega_nombre, self.persona_nombre)
    }

    fn entity_metadata_info() -> EntityMetadataInfo {
        ENTITY_METADATA
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn check(request: &BodegaResponsableRequest) -> Result<(), FormWarning> {
        check_date_range(&request.fecha_inicio, request.fecha_fin.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a204_company_member::PersonaEmpresa;

    #[test]
    fn test_enrich_through_member() {
        let bodegas = vec![Bodega {
            id: 2,
            nombre: "Central".into(),
            codigo: "B01".into(),
            ..Bodega::default()
        }];
        let miembros = vec![PersonaEmpresaDetalle {
            base: PersonaEmpresa {
                id: 30,
                persona_id: 3,
                ..PersonaEmpresa::default()
            },
            persona_nombre: "Ana".into(),
            persona_cedula: "0102".into(),
            empresa_nombre: "Acme".into(),
            empresa_nit: "179".into(),
        }];
        let asignaciones = vec![
            BodegaResponsable {
                id: 1,
                bodega_id: 2,
                persona_empresa_id: 30,
                ..BodegaResponsable::default()
            },
            BodegaResponsable {
                id: 2,
                bodega_id: 99,
                persona_empresa_id: 31,
                ..BodegaResponsable::default()
            },
        ];
        let rows = enrich(&asignaciones, &bodegas, &miembros);
        assert_eq!(rows[0].bodega_codigo, "B01");
        assert_eq!(rows[0].persona_nombre, "Ana");
        assert_eq!(rows[1].bodega_nombre, UNKNOWN);
        assert_eq!(rows[1].persona_cedula, NOT_AVAILABLE);
        assert_eq!(rows[0].display_name(), "Central - Ana");
    }
}
