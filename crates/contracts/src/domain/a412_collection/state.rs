//! Estado de un cobro y reglas de confirmación y anulación

use serde::{Deserialize, Serialize};

pub const NOT_PENDING_EDIT: &str = "Solo se pueden editar cobros pendientes";
pub const NOT_PENDING_CONFIRM: &str = "Solo se pueden confirmar cobros pendientes";
pub const ALREADY_VOID: &str = "El cobro ya está anulado";
pub const VOID_REASON_PROMPT: &str = "Ingrese el motivo de anulación:";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollectionState {
    #[default]
    Pendiente,
    Confirmado,
    Anulado,
}

impl CollectionState {
    pub const ALL: [CollectionState; 3] = [Self::Pendiente, Self::Confirmado, Self::Anulado];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pendiente => "PENDIENTE",
            Self::Confirmado => "CONFIRMADO",
            Self::Anulado => "ANULADO",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pendiente => "Pendiente",
            Self::Confirmado => "Confirmado",
            Self::Anulado => "Anulado",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Pendiente => "badge-warning",
            Self::Confirmado => "badge-success",
            Self::Anulado => "badge-danger",
        }
    }

    pub fn can_confirm(&self) -> Result<(), &'static str> {
        match self {
            Self::Pendiente => Ok(()),
            _ => Err(NOT_PENDING_CONFIRM),
        }
    }

    pub fn can_void(&self) -> Result<(), &'static str> {
        match self {
            Self::Anulado => Err(ALREADY_VOID),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionAction {
    Confirmar,
    Anular,
}

impl CollectionAction {
    /// Sufijo del endpoint `PATCH /{id}/<accion>`
    pub fn path(&self) -> &'static str {
        match self {
            Self::Confirmar => "confirmar",
            Self::Anular => "anular",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Confirmar => "Confirmar",
            Self::Anular => "Anular",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Self::Confirmar => "Cobro confirmado exitosamente",
            Self::Anular => "Cobro anulado exitosamente",
        }
    }

    pub fn error_title(&self) -> &'static str {
        match self {
            Self::Confirmar => "Error al confirmar",
            Self::Anular => "Error al anular",
        }
    }
}

/// Cuerpo de `PATCH /{id}/anular`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnulacionRequest {
    pub motivo: String,
}

impl AnulacionRequest {
    /// `None` si el motivo está vacío, en ese caso no se anula
    pub fn from_input(motivo: Option<String>) -> Option<Self> {
        motivo
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .map(|motivo| Self { motivo })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_rules() {
        assert!(CollectionState::Pendiente.can_confirm().is_ok());
        assert_eq!(
            CollectionState::Confirmado.can_confirm(),
            Err(NOT_PENDING_CONFIRM)
        );
        assert!(CollectionState::Confirmado.can_void().is_ok());
        assert_eq!(CollectionState::Anulado.can_void(), Err(ALREADY_VOID));
    }

    #[test]
    fn test_void_reason_input() {
        assert_eq!(AnulacionRequest::from_input(None), None);
        assert_eq!(AnulacionRequest::from_input(Some("   ".into())), None);
        assert_eq!(
            AnulacionRequest::from_input(Some(" cheque devuelto ".into())),
            Some(AnulacionRequest {
                motivo: "cheque devuelto".into()
            })
        );
    }
}
