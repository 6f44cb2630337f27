use serde::{Deserialize, Serialize};

use super::metadata::{ENTITY_METADATA, FIELDS};
use crate::domain::common::{check_date_range, date_input, AggregateRoot};
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata, FormWarning};
use crate::shared::search::Searchable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CuentaPorCobrar {
    pub id: i64,
    pub numero_cuenta: String,
    pub factura_id: i64,
    pub factura_numero: Option<String>,
    pub cliente_id: i64,
    pub cliente_nombre: String,
    pub fecha_emision: String,
    pub fecha_vencimiento: String,
    pub dias_credito: i32,
    pub monto_original: f64,
    pub monto_pagado: f64,
    pub monto_pendiente: f64,
    pub estado: String,
    pub dias_vencidos: Option<i32>,
    pub observaciones: Option<String>,
    pub activo: bool,
    pub esta_vencida: bool,
    pub tiene_saldo_pendiente: bool,
    pub fecha_creacion: Option<String>,
    pub fecha_modificacion: Option<String>,
}

/// Situación de cobro que se muestra en la lista, derivada de los indicadores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReceivableStatus {
    Pendiente,
    Vencida,
    Pagada,
}

impl ReceivableStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pendiente => "PENDIENTE",
            Self::Vencida => "VENCIDA",
            Self::Pagada => "PAGADA",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Pendiente => "badge-warning",
            Self::Vencida => "badge-danger",
            Self::Pagada => "badge-success",
        }
    }
}

/// Filtro de la lista de cuentas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReceivableFilter {
    #[default]
    Todas,
    Pendientes,
    Vencidas,
    Pagadas,
}

impl ReceivableFilter {
    pub const ALL: [ReceivableFilter; 4] =
        [Self::Todas, Self::Pendientes, Self::Vencidas, Self::Pagadas];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Todas => "Todas",
            Self::Pendientes => "Pendientes",
            Self::Vencidas => "Vencidas",
            Self::Pagadas => "Pagadas",
        }
    }

    pub fn accepts(&self, cuenta: &CuentaPorCobrar) -> bool {
        match self {
            Self::Todas => true,
            Self::Pendientes => cuenta.tiene_saldo_pendiente,
            Self::Vencidas => cuenta.esta_vencida,
            Self::Pagadas => !cuenta.tiene_saldo_pendiente,
        }
    }
}

impl CuentaPorCobrar {
    pub fn status(&self) -> ReceivableStatus {
        if self.esta_vencida {
            ReceivableStatus::Vencida
        } else if !self.tiene_saldo_pendiente {
            ReceivableStatus::Pagada
        } else {
            ReceivableStatus::Pendiente
        }
    }

    /// Porcentaje cobrado del monto original, 0 a 100
    pub fn porcentaje_pagado(&self) -> f64 {
        if self.monto_original <= 0.0 {
            return 0.0;
        }
        (self.monto_pagado / self.monto_original * 100.0).clamp(0.0, 100.0)
    }
}

pub fn filter_accounts(cuentas: &[CuentaPorCobrar], filter: ReceivableFilter) -> Vec<CuentaPorCobrar> {
    cuentas
        .iter()
        .filter(|c| filter.accepts(c))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuentaPorCobrarRequest {
    pub numero_cuenta: String,
    pub factura_id: i64,
    pub cliente_id: i64,
    pub fecha_emision: String,
    pub fecha_vencimiento: String,
    pub dias_credito: i32,
    pub monto_original: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monto_pagado: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
}

impl Searchable for CuentaPorCobrar {
    const SEARCH_FIELDS: &'static [&'static str] =
        &["numeroCuenta", "clienteNombre", "facturaNumero"];
}

impl AggregateRoot for CuentaPorCobrar {
    type Request = CuentaPorCobrarRequest;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn to_request(&self) -> CuentaPorCobrarRequest {
        CuentaPorCobrarRequest {
            numero_cuenta: self.numero_cuenta.clone(),
            factura_id: self.factura_id,
            cliente_id: self.cliente_id,
            fecha_emision: date_input(&self.fecha_emision),
            fecha_vencimiento: date_input(&self.fecha_vencimiento),
            dias_credito: self.dias_credito,
            monto_original: self.monto_original,
            monto_pagado: Some(self.monto_pagado),
            observaciones: self.observaciones.clone(),
        }
    }

    fn display_name(&self) -> String {
        self.numero_cuenta.clone()
    }

    fn entity_metadata_info() -> EntityMetadataInfo {
        ENTITY_METADATA
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn check(request: &CuentaPorCobrarRequest) -> Result<(), FormWarning> {
        check_date_range(&request.fecha_emision, Some(request.fecha_vencimiento.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cuenta(id: i64, vencida: bool, saldo: bool) -> CuentaPorCobrar {
        CuentaPorCobrar {
            id,
            monto_original: 200.0,
            monto_pagado: if saldo { 50.0 } else { 200.0 },
            esta_vencida: vencida,
            tiene_saldo_pendiente: saldo,
            ..CuentaPorCobrar::default()
        }
    }

    #[test]
    fn test_status() {
        assert_eq!(cuenta(1, true, true).status(), ReceivableStatus::Vencida);
        assert_eq!(cuenta(2, false, false).status(), ReceivableStatus::Pagada);
        assert_eq!(cuenta(3, false, true).status(), ReceivableStatus::Pendiente);
        assert_eq!(cuenta(3, false, true).porcentaje_pagado(), 25.0);
        assert_eq!(CuentaPorCobrar::default().porcentaje_pagado(), 0.0);
    }

    #[test]
    fn test_filters() {
        let cuentas = vec![cuenta(1, true, true), cuenta(2, false, false), cuenta(3, false, true)];
        let ids = |f| -> Vec<i64> { filter_accounts(&cuentas, f).iter().map(|c| c.id).collect() };
        assert_eq!(ids(ReceivableFilter::Todas), vec![1, 2, 3]);
        assert_eq!(ids(ReceivableFilter::Pendientes), vec![1, 3]);
        assert_eq!(ids(ReceivableFilter::Vencidas), vec![1]);
        assert_eq!(ids(ReceivableFilter::Pagadas), vec![2]);
    }
}
