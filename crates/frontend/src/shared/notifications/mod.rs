//! Avisos, confirmaciones y toasts de la aplicación.
//!
//! Los controladores dependen del trait [`Notifier`]; en el navegador lo
//! implementa [`NotificationService`], que se pinta con [`NotificationHost`].

mod host;
mod service;

pub use host::NotificationHost;
pub use service::{Dialog, DialogKind, DialogOutcome, NotificationService, Toast};

use async_trait::async_trait;

pub const SUCCESS_TITLE: &str = "¡Éxito!";
pub const ERROR_TITLE: &str = "Error";
pub const WARNING_TITLE: &str = "Advertencia";
pub const INFO_TITLE: &str = "Información";
pub const CONFIRM_TITLE: &str = "¿Estás seguro?";
pub const CONFIRM_LABEL: &str = "Sí, confirmar";
pub const CANCEL_LABEL: &str = "Cancelar";
pub const DELETE_TITLE: &str = "¿Eliminar?";
pub const DELETE_CONFIRM_LABEL: &str = "Sí, eliminar";
pub const REQUIRED_INPUT: &str = "Este campo es requerido";
pub const LOADING_MESSAGE: &str = "Cargando...";

pub const SUCCESS_AUTO_CLOSE_MS: u32 = 3000;
pub const TOAST_DURATION_MS: u32 = 3000;
pub const REDIRECT_DELAY_MS: u32 = 2000;

pub fn delete_message(item: &str) -> String {
    format!(
        "¿Estás seguro de que deseas eliminar {}? Esta acción no se puede deshacer.",
        item
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NoticeKind {
    pub fn css(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "check-circle",
            Self::Error => "x-circle",
            Self::Warning => "alert-triangle",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastPosition {
    Top,
    TopStart,
    #[default]
    TopEnd,
    Center,
    CenterStart,
    CenterEnd,
    Bottom,
    BottomStart,
    BottomEnd,
}

impl ToastPosition {
    pub const ALL: [ToastPosition; 9] = [
        Self::Top,
        Self::TopStart,
        Self::TopEnd,
        Self::Center,
        Self::CenterStart,
        Self::CenterEnd,
        Self::Bottom,
        Self::BottomStart,
        Self::BottomEnd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::TopStart => "top-start",
            Self::TopEnd => "top-end",
            Self::Center => "center",
            Self::CenterStart => "center-start",
            Self::CenterEnd => "center-end",
            Self::Bottom => "bottom",
            Self::BottomStart => "bottom-start",
            Self::BottomEnd => "bottom-end",
        }
    }
}

/// Canal de avisos al usuario. Toda operación termina, ninguna falla.
#[async_trait(?Send)]
pub trait Notifier {
    async fn success(&self, message: &str, title: Option<&str>);

    async fn error(&self, message: &str, title: Option<&str>);

    async fn warning(&self, message: &str, title: Option<&str>);

    async fn info(&self, message: &str, title: Option<&str>);

    /// `true` solo si el usuario pulsó el botón de confirmar
    async fn confirm(
        &self,
        message: &str,
        title: Option<&str>,
        confirm_label: Option<&str>,
        cancel_label: Option<&str>,
    ) -> bool;

    async fn confirm_delete(&self, item: &str) -> bool {
        self.confirm(
            &delete_message(item),
            Some(DELETE_TITLE),
            Some(DELETE_CONFIRM_LABEL),
            None,
        )
        .await
    }

    /// `None` si se canceló
    async fn input_text(&self, title: &str, label: &str, placeholder: Option<&str>) -> Option<String> {
        self.input_text_with_value(title, label, placeholder, "").await
    }

    /// Como `input_text`, con el campo ya rellenado con `initial`
    async fn input_text_with_value(
        &self,
        title: &str,
        label: &str,
        placeholder: Option<&str>,
        initial: &str,
    ) -> Option<String>;

    fn toast(&self, message: &str, kind: NoticeKind, position: Option<ToastPosition>);

    fn loading(&self, message: Option<&str>);

    fn close(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_message() {
        assert_eq!(
            delete_message("Acme"),
            "¿Estás seguro de que deseas eliminar Acme? Esta acción no se puede deshacer."
        );
    }

    #[test]
    fn test_positions() {
        let names: Vec<&str> = ToastPosition::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(names.len(), 9);
        assert!(names.contains(&"center-start"));
        assert_eq!(ToastPosition::default().as_str(), "top-end");
    }
}
