use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::common::{date_input, parse_date, AggregateRoot};
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata, FormWarning};
use crate::shared::search::Searchable;

pub const LOT_DATES_TITLE: &str = "Fechas inválidas";
pub const LOT_DATES_MESSAGE: &str =
    "La fecha de vencimiento debe ser posterior a la fecha de fabricación";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductoLote {
    pub id: i64,
    pub numero_lote: String,
    pub fecha_vencimiento: String,
    pub fecha_fabricacion: String,
    pub activo: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductoLoteRequest {
    pub numero_lote: String,
    pub fecha_vencimiento: String,
    pub fecha_fabricacion: String,
}

impl Searchable for ProductoLote {
    const SEARCH_FIELDS: &'static [&'static str] = &["numeroLote"];
}

impl AggregateRoot for ProductoLote {
    type Request = ProductoLoteRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> ProductoLoteRequest {
        ProductoLoteRequest {
            numero_lote: self.numero_lote.clone(),
            fecha_vencimiento: date_input(&self.fecha_vencimiento),
            fecha_fabricacion: date_input(&self.fecha_fabricacion),
        }
    }

    fn display_name(&self) -> String {
        self.numero_lote.clone()
    }

    fn entity_metadata_info() -> EntityMetadataInfo {
        ENTITY_METADATA
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    /// El vencimiento tiene que ser estrictamente posterior a la fabricación
    fn check(request: &ProductoLoteRequest) -> Result<(), FormWarning> {
        match (
            parse_date(&request.fecha_fabricacion),
            parse_date(&request.fecha_vencimiento),
        ) {
            (Some(fabricacion), Some(vencimiento)) if vencimiento <= fabricacion => {
                Err(FormWarning::titled(LOT_DATES_TITLE, LOT_DATES_MESSAGE))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lote(fabricacion: &str, vencimiento: &str) -> ProductoLoteRequest {
        ProductoLoteRequest {
            numero_lote: "L-001".into(),
            fecha_fabricacion: fabricacion.into(),
            fecha_vencimiento: vencimiento.into(),
        }
    }

    #[test]
    fn test_expiry_after_manufacture() {
        assert!(ProductoLote::check(&lote("2024-01-01", "2025-01-01")).is_ok());
        let same_day = ProductoLote::check(&lote("2024-01-01", "2024-01-01")).unwrap_err();
        assert_eq!(same_day.title, Some(LOT_DATES_TITLE));
        assert_eq!(same_day.message, LOT_DATES_MESSAGE);
        assert!(ProductoLote::check(&lote("2024-01-01", "2023-12-31")).is_err());
    }

    #[test]
    fn test_edit_trims_timestamps() {
        let lote = ProductoLote {
            id: 1,
            numero_lote: "L-9".into(),
            fecha_fabricacion: "2024-02-01T00:00:00".into(),
            fecha_vencimiento: "2024-08-01T00:00:00".into(),
            activo: true,
        };
        let request = lote.to_request();
        assert_eq!(request.fecha_fabricacion, "2024-02-01");
        assert_eq!(request.fecha_vencimiento, "2024-08-01");
    }
}
