use serde::{Deserialize, Serialize};

use super::metadata::{AFECTA_INVENTARIO, ENTITY_METADATA, FIELDS};
use crate::domain::common::AggregateRoot;
use crate::shared::metadata::{EntityMetadataInfo, FieldKind, FieldMetadata};
use crate::shared::search::Searchable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TipoMovimiento {
    pub id: i64,
    pub codigo: String,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub afecta_inventario: String,
    pub requiere_aprobacion: bool,
    pub genera_asiento: bool,
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipoMovimientoRequest {
    pub codigo: String,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub afecta_inventario: String,
    pub requiere_aprobacion: bool,
    pub genera_asiento: bool,
}

impl Default for TipoMovimientoRequest {
    fn default() -> Self {
        Self {
            codigo: String::new(),
            nombre: String::new(),
            descripcion: None,
            afecta_inventario: "ENTRADA".to_string(),
            requiere_aprobacion: false,
            genera_asiento: false,
        }
    }
}

impl TipoMovimiento {
    /// Etiqueta de `afectaInventario`; valores desconocidos se muestran tal cual
    pub fn afecta_inventario_label(&self) -> String {
        FieldKind::Choice(AFECTA_INVENTARIO)
            .choice_label(&self.afecta_inventario)
            .map(str::to_string)
            .unwrap_or_else(|| self.afecta_inventario.clone())
    }
}

impl Searchable for TipoMovimiento {
    const SEARCH_FIELDS: &'static [&'static str] = &["nombre", "codigo", "afectaInventario", "id"];
}

impl AggregateRoot for TipoMovimiento {
    type Request = TipoMovimientoRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> TipoMovimientoRequest {
        TipoMovimientoRequest {
            codigo: self.codigo.clone(),
            nombre: self.nombre.clone(),
            descripcion: self.descripcion.clone(),
            afecta_inventario: self.afecta_inventario.clone(),
            requiere_aprobacion: self.requiere_aprobacion,
            genera_asiento: self.genera_asiento,
        }
    }

    fn display_name(&self) -> String {
        self.nombre.clone()
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
    fn test_afecta_inventario_label() {
        let mut tipo = TipoMovimiento {
            afecta_inventario: "SALIDA".into(),
            ..TipoMovimiento::default()
        };
        assert_eq!(tipo.afecta_inventario_label(), "Salida");
        tipo.afecta_inventario = "AJUSTE".into();
        assert_eq!(tipo.afecta_inventario_label(), "AJUSTE");
        assert_eq!(TipoMovimientoRequest::default().afecta_inventario, "ENTRADA");
    }
}
