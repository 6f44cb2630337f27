use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::a205_process::Proceso;
use crate::domain::common::AggregateRoot;
use crate::shared::enrichment::{Lookup, NOT_AVAILABLE, UNKNOWN};
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use crate::shared::search::Searchable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccionProceso {
    pub id: i64,
    pub codigo: String,
    pub proceso_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccionProcesoRequest {
    pub codigo: String,
    pub proceso_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccionProcesoDetalle {
    #[serde(flatten)]
    pub base: AccionProceso,
    pub proceso_nombre: String,
    pub proceso_codigo: String,
}

impl AccionProcesoDetalle {
    /// `CODIGO (Proceso)`, usado en los selects de permisos
    pub fn label(&self) -> String {
        format!("{} ({})", self.base.codigo, self.proceso_nombre)
    }
}

pub fn enrich(acciones: &[AccionProceso], procesos: &[Proceso]) -> Vec<AccionProcesoDetalle> {
    let procesos = Lookup::by(procesos, |p| p.id);
    acciones
        .iter()
        .map(|a| AccionProcesoDetalle {
            base: a.clone(),
            proceso_nombre: procesos.text(Some(a.proceso_id), |p| p.nombre.clone(), UNKNOWN),
            proceso_codigo: procesos.text(Some(a.proceso_id), |p| p.codigo.clone(), NOT_AVAILABLE),
        })
        .collect()
}

impl Searchable for AccionProcesoDetalle {
    const SEARCH_FIELDS: &'static [&'static str] = &["codigo", "procesoNombre", "procesoCodigo"];
}

impl AggregateRoot for AccionProcesoDetalle {
    type Request = AccionProcesoRequest;

    fn id(&self) -> Option<i64> {
        Some(self.base.id)
    }

    fn to_request(&self) -> AccionProcesoRequest {
        AccionProcesoRequest {
            codigo: self.base.codigo.clone(),
            proceso_id: self.base.proceso_id,
        }
    }

    fn display_name(&self) -> String {
        self.base.codigo.clone()
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
    fn test_enrich_and_search() {
        let procesos = vec![Proceso {
            id: 1,
            codigo: "INV".into(),
            nombre: "Inventario".into(),
        }];
        let acciones = vec![
            AccionProceso {
                id: 10,
                codigo: "APROBAR".into(),
                proceso_id: 1,
            },
            AccionProceso {
                id: 11,
                codigo: "ANULAR".into(),
                proceso_id: 2,
            },
        ];
        let rows = enrich(&acciones, &procesos);
        assert_eq!(rows[0].label(), "APROBAR (Inventario)");
        assert_eq!(rows[1].proceso_codigo, NOT_AVAILABLE);
        // el nombre del proceso participa en la búsqueda
        assert!(rows[0].matches_filter("invent"));
        assert!(!rows[1].matches_filter("invent"));
    }
}
