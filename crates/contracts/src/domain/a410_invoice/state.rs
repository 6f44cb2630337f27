//! Estado de una factura y operaciones que ofrece la lista

use serde::{Deserialize, Serialize};

use crate::shared::metadata::parse_decimal;

pub const INVALID_PAYMENT_TITLE: &str = "Datos inválidos";
pub const INVALID_PAYMENT_MESSAGE: &str = "Por favor ingrese un monto válido";
pub const INCOMPLETE_AUTH_TITLE: &str = "Datos incompletos";
pub const INCOMPLETE_AUTH_MESSAGE: &str = "Complete todos los campos de autorización";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceState {
    #[default]
    Pendiente,
    Pagada,
    Vencida,
    Anulada,
}

impl InvoiceState {
    pub const ALL: [InvoiceState; 4] = [
        Self::Pendiente,
        Self::Pagada,
        Self::Vencida,
        Self::Anulada,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pendiente => "PENDIENTE",
            Self::Pagada => "PAGADA",
            Self::Vencida => "VENCIDA",
            Self::Anulada => "ANULADA",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pendiente => "Pendiente",
            Self::Pagada => "Pagada",
            Self::Vencida => "Vencida",
            Self::Anulada => "Anulada",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Pendiente => "badge-warning",
            Self::Pagada => "badge-success",
            Self::Vencida => "badge-danger",
            Self::Anulada => "badge-secondary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceAction {
    RegistrarPago,
    AutorizarSri,
    Anular,
}

impl InvoiceAction {
    /// Sufijo del endpoint `POST /{id}/<accion>`
    pub fn path(&self) -> &'static str {
        match self {
            Self::RegistrarPago => "registrar-pago",
            Self::AutorizarSri => "autorizar-sri",
            Self::Anular => "anular",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::RegistrarPago => "Registrar pago",
            Self::AutorizarSri => "Autorizar SRI",
            Self::Anular => "Anular",
        }
    }

    /// `(título, mensaje)` del aviso de éxito
    pub fn success(&self) -> (&'static str, &'static str) {
        match self {
            Self::RegistrarPago => ("Pago registrado", "El pago se registró correctamente"),
            Self::AutorizarSri => ("Factura autorizada", "La factura fue autorizada por el SRI"),
            Self::Anular => ("Factura anulada", "La factura se anuló correctamente"),
        }
    }

    pub fn error_title(&self) -> &'static str {
        match self {
            Self::RegistrarPago => "Error al registrar pago",
            Self::AutorizarSri => "Error al autorizar",
            Self::Anular => "Error al anular factura",
        }
    }
}

/// Cuerpo de `registrar-pago`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PagoRequest {
    pub monto: f64,
}

impl PagoRequest {
    /// Monto escrito en el diálogo de pago, con punto o coma decimal
    pub fn from_input(raw: &str) -> Result<Self, (&'static str, &'static str)> {
        let monto =
            parse_decimal(raw).map_err(|_| (INVALID_PAYMENT_TITLE, INVALID_PAYMENT_MESSAGE))?;
        let body = Self { monto };
        body.validate()?;
        Ok(body)
    }

    pub fn validate(&self) -> Result<(), (&'static str, &'static str)> {
        if self.monto.is_finite() && self.monto >= 0.01 {
            Ok(())
        } else {
            Err((INVALID_PAYMENT_TITLE, INVALID_PAYMENT_MESSAGE))
        }
    }
}

/// Cuerpo de `autorizar-sri`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutorizacionSriRequest {
    pub numero_autorizacion: String,
    pub clave_acceso: String,
}

impl AutorizacionSriRequest {
    pub fn validate(&self) -> Result<(), (&'static str, &'static str)> {
        if self.numero_autorizacion.trim().is_empty() || self.clave_acceso.trim().is_empty() {
            Err((INCOMPLETE_AUTH_TITLE, INCOMPLETE_AUTH_MESSAGE))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_wire_names() {
        let state: InvoiceState = serde_json::from_str("\"VENCIDA\"").unwrap();
        assert_eq!(state, InvoiceState::Vencida);
        assert_eq!(InvoiceState::from_str_opt("PAGADA"), Some(InvoiceState::Pagada));
        assert_eq!(InvoiceState::from_str_opt("TODOS"), None);
    }

    #[test]
    fn test_payment_and_authorization_bodies() {
        assert!(PagoRequest { monto: 0.0 }.validate().is_err());
        assert!(PagoRequest { monto: 12.5 }.validate().is_ok());
        assert_eq!(PagoRequest::from_input("2,5"), Ok(PagoRequest { monto: 2.5 }));
        assert_eq!(PagoRequest::from_input(" 12.50 "), Ok(PagoRequest { monto: 12.5 }));
        assert_eq!(
            PagoRequest::from_input("doce"),
            Err((INVALID_PAYMENT_TITLE, INVALID_PAYMENT_MESSAGE))
        );
        assert!(PagoRequest::from_input("0").is_err());

        let auth = AutorizacionSriRequest {
            numero_autorizacion: "123".into(),
            clave_acceso: " ".into(),
        };
        assert_eq!(
            auth.validate(),
            Err((INCOMPLETE_AUTH_TITLE, INCOMPLETE_AUTH_MESSAGE))
        );
        let json = serde_json::to_value(AutorizacionSriRequest {
            numero_autorizacion: "1".into(),
            clave_acceso: "2".into(),
        })
        .unwrap();
        assert_eq!(json["numeroAutorizacion"], "1");
        assert_eq!(json["claveAcceso"], "2");
    }
}
