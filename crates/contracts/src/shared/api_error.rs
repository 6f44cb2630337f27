//! Errores del cliente REST. Todo `ApiError` termina convertido en un texto
//! para el usuario con [`ApiError::user_message`].

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_ERROR_MESSAGE: &str = "Ocurrió un error en la operación";
pub const NETWORK_ERROR_MESSAGE: &str =
    "No se pudo conectar con el servidor. Verifica tu conexión.";
pub const SERVER_ERROR_MESSAGE: &str = "Error interno del servidor. Intenta más tarde.";
pub const BAD_REQUEST_MESSAGE: &str = "Datos inválidos";
pub const CONFLICT_MESSAGE: &str = "Ya existe un registro con esos datos";

/// Per-entity texts for 404 and 409 responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorMessages {
    pub not_found: &'static str,
    pub conflict: &'static str,
}

impl ErrorMessages {
    pub const fn new(not_found: &'static str, conflict: &'static str) -> Self {
        Self {
            not_found,
            conflict,
        }
    }

    /// Entity without a specific conflict text
    pub const fn not_found(not_found: &'static str) -> Self {
        Self::new(not_found, CONFLICT_MESSAGE)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("bad request: {0:?}")]
    BadRequest(Option<String>),
    #[error("not found")]
    NotFound,
    #[error("conflict: {0:?}")]
    Conflict(Option<String>),
    #[error("server error {status}")]
    Server { status: u16 },
    #[error("unexpected status {status}: {message:?}")]
    Status {
        status: u16,
        message: Option<String>,
    },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn body_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

impl ApiError {
    /// Build from an HTTP status and the raw response body
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = body_message(body);
        match status {
            0 => Self::Network(message.unwrap_or_default()),
            400 => Self::BadRequest(message),
            404 => Self::NotFound,
            409 => Self::Conflict(message),
            500 => Self::Server { status },
            _ => Self::Status { status, message },
        }
    }

    /// Transient failures worth repeating a GET for
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Server { .. } => true,
            Self::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }

    pub fn user_message(&self, messages: &ErrorMessages) -> String {
        match self {
            Self::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            Self::BadRequest(message) => message
                .clone()
                .unwrap_or_else(|| BAD_REQUEST_MESSAGE.to_string()),
            Self::NotFound => messages.not_found.to_string(),
            Self::Conflict(_) => messages.conflict.to_string(),
            Self::Server { .. } => SERVER_ERROR_MESSAGE.to_string(),
            Self::Status { status, message } => format!(
                "Error {}: {}",
                status,
                message.as_deref().unwrap_or(DEFAULT_ERROR_MESSAGE)
            ),
            Self::Decode(_) => DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPRESA: ErrorMessages =
        ErrorMessages::new("Empresa no encontrada", "Ya existe una empresa con ese NIT");

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from_status(0, "").user_message(&EMPRESA),
            NETWORK_ERROR_MESSAGE
        );
        assert_eq!(
            ApiError::from_status(404, "").user_message(&EMPRESA),
            "Empresa no encontrada"
        );
        assert_eq!(
            ApiError::from_status(409, r#"{"message":"duplicate key"}"#).user_message(&EMPRESA),
            "Ya existe una empresa con ese NIT"
        );
        assert_eq!(
            ApiError::from_status(500, "<html>").user_message(&EMPRESA),
            SERVER_ERROR_MESSAGE
        );
    }

    #[test]
    fn test_bad_request_uses_backend_message() {
        let err = ApiError::from_status(400, r#"{"message":"El NIT es obligatorio"}"#);
        assert_eq!(err.user_message(&EMPRESA), "El NIT es obligatorio");
        let err = ApiError::from_status(400, "not json");
        assert_eq!(err.user_message(&EMPRESA), BAD_REQUEST_MESSAGE);
    }

    #[test]
    fn test_other_status() {
        let err = ApiError::from_status(403, r#"{"message":"Prohibido"}"#);
        assert_eq!(err.user_message(&EMPRESA), "Error 403: Prohibido");
        let err = ApiError::from_status(418, "");
        assert_eq!(err.user_message(&EMPRESA), format!("Error 418: {}", DEFAULT_ERROR_MESSAGE));
    }

    #[test]
    fn test_retryable() {
        assert!(ApiError::Network("refused".into()).is_retryable());
        assert!(ApiError::from_status(500, "").is_retryable());
        assert!(ApiError::from_status(503, "").is_retryable());
        assert!(!ApiError::from_status(404, "").is_retryable());
        assert!(!ApiError::from_status(400, "").is_retryable());
        assert!(!ApiError::Decode("eof".into()).is_retryable());
    }
}
