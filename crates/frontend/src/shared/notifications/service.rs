use async_trait::async_trait;
use futures::channel::oneshot;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{
    Notifier, NoticeKind, ToastPosition, CANCEL_LABEL, CONFIRM_LABEL, CONFIRM_TITLE,
    ERROR_TITLE, INFO_TITLE, LOADING_MESSAGE, REDIRECT_DELAY_MS, SUCCESS_AUTO_CLOSE_MS,
    SUCCESS_TITLE, TOAST_DURATION_MS, WARNING_TITLE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Notice(NoticeKind),
    Confirm,
    Input,
    Loading,
}

/// Diálogo modal abierto en este momento
#[derive(Debug, Clone, PartialEq)]
pub struct Dialog {
    pub id: u64,
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: Option<String>,
    pub placeholder: Option<String>,
    /// Texto inicial del campo en diálogos de entrada
    pub value: String,
}

impl Dialog {
    fn notice(kind: NoticeKind, title: &str, message: &str) -> Self {
        Self {
            id: 0,
            kind: DialogKind::Notice(kind),
            title: title.to_string(),
            message: message.to_string(),
            confirm_label: "Aceptar".to_string(),
            cancel_label: None,
            placeholder: None,
            value: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    Confirmed,
    Cancelled,
    /// Cerrado por temporizador, por `close()` o por otro diálogo
    Dismissed,
    Input(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: NoticeKind,
    pub position: ToastPosition,
}

type Pending = Option<(u64, oneshot::Sender<DialogOutcome>)>;

/// Servicio de avisos en contexto. Solo hay un diálogo abierto a la vez.
#[derive(Clone, Copy)]
pub struct NotificationService {
    pub dialog: RwSignal<Option<Dialog>>,
    pub toasts: RwSignal<Vec<Toast>>,
    pending: StoredValue<Pending>,
    next_id: StoredValue<u64>,
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            dialog: RwSignal::new(None),
            toasts: RwSignal::new(Vec::new()),
            pending: StoredValue::new(None),
            next_id: StoredValue::new(0),
        }
    }

    fn next_id(&self) -> u64 {
        let mut id = 0;
        self.next_id.update_value(|n| {
            *n += 1;
            id = *n;
        });
        id
    }

    fn take_pending(&self, only: Option<u64>) -> Pending {
        let mut taken = None;
        self.pending.update_value(|pending| {
            let matches = match (only, pending.as_ref()) {
                (_, None) => false,
                (None, Some(_)) => true,
                (Some(id), Some((current, _))) => *current == id,
            };
            if matches {
                taken = pending.take();
            }
        });
        taken
    }

    /// Muestra `dialog`; el anterior, si lo hay, se resuelve como descartado
    pub fn open(&self, mut dialog: Dialog) -> (u64, oneshot::Receiver<DialogOutcome>) {
        let id = self.next_id();
        dialog.id = id;
        let (tx, rx) = oneshot::channel();

        if let Some((_, previous)) = self.take_pending(None) {
            let _ = previous.send(DialogOutcome::Dismissed);
        }
        self.pending.set_value(Some((id, tx)));
        self.dialog.set(Some(dialog));
        (id, rx)
    }

    /// Respuestas a diálogos ya cerrados se ignoran
    pub fn respond(&self, id: u64, outcome: DialogOutcome) {
        if let Some((_, tx)) = self.take_pending(Some(id)) {
            let _ = tx.send(outcome);
        }
        if self
            .dialog
            .with_untracked(|d| d.as_ref().map(|d| d.id) == Some(id))
        {
            self.dialog.set(None);
        }
    }

    pub fn dismiss_toast(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn close_after(&self, id: u64, ms: u32) {
        let service = *self;
        spawn_local(async move {
            TimeoutFuture::new(ms).await;
            service.respond(id, DialogOutcome::Dismissed);
        });
    }

    async fn show(&self, dialog: Dialog, auto_close_ms: Option<u32>) -> DialogOutcome {
        let (id, rx) = self.open(dialog);
        if let Some(ms) = auto_close_ms {
            self.close_after(id, ms);
        }
        rx.await.unwrap_or(DialogOutcome::Dismissed)
    }

    async fn notice(&self, kind: NoticeKind, default_title: &str, message: &str, title: Option<&str>) {
        let auto_close = matches!(kind, NoticeKind::Success).then_some(SUCCESS_AUTO_CLOSE_MS);
        let dialog = Dialog::notice(kind, title.unwrap_or(default_title), message);
        self.show(dialog, auto_close).await;
    }

    /// Aviso de éxito de 2 s y navegación a `url`
    pub async fn success_with_redirect(&self, message: &str, url: &str) {
        let dialog = Dialog::notice(NoticeKind::Success, SUCCESS_TITLE, message);
        self.show(dialog, Some(REDIRECT_DELAY_MS)).await;
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                log::error!("No se pudo navegar a {}: {:?}", url, e);
            }
        }
    }
}

#[async_trait(?Send)]
impl Notifier for NotificationService {
    async fn success(&self, message: &str, title: Option<&str>) {
        self.notice(NoticeKind::Success, SUCCESS_TITLE, message, title)
            .await
    }

    async fn error(&self, message: &str, title: Option<&str>) {
        self.notice(NoticeKind::Error, ERROR_TITLE, message, title)
            .await
    }

    async fn warning(&self, message: &str, title: Option<&str>) {
        self.notice(NoticeKind::Warning, WARNING_TITLE, message, title)
            .await
    }

    async fn info(&self, message: &str, title: Option<&str>) {
        self.notice(NoticeKind::Info, INFO_TITLE, message, title)
            .await
    }

    async fn confirm(
        &self,
        message: &str,
        title: Option<&str>,
        confirm_label: Option<&str>,
        cancel_label: Option<&str>,
    ) -> bool {
        let dialog = Dialog {
            id: 0,
            kind: DialogKind::Confirm,
            title: title.unwrap_or(CONFIRM_TITLE).to_string(),
            message: message.to_string(),
            confirm_label: confirm_label.unwrap_or(CONFIRM_LABEL).to_string(),
            cancel_label: Some(cancel_label.unwrap_or(CANCEL_LABEL).to_string()),
            placeholder: None,
            value: String::new(),
        };
        self.show(dialog, None).await == DialogOutcome::Confirmed
    }

    async fn input_text_with_value(
        &self,
        title: &str,
        label: &str,
        placeholder: Option<&str>,
        initial: &str,
    ) -> Option<String> {
        let dialog = Dialog {
            id: 0,
            kind: DialogKind::Input,
            title: title.to_string(),
            message: label.to_string(),
            confirm_label: "Aceptar".to_string(),
            cancel_label: Some(CANCEL_LABEL.to_string()),
            placeholder: placeholder.map(str::to_string),
            value: initial.to_string(),
        };
        match self.show(dialog, None).await {
            DialogOutcome::Input(value) => Some(value),
            _ => None,
        }
    }

    fn toast(&self, message: &str, kind: NoticeKind, position: Option<ToastPosition>) {
        let id = self.next_id();
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                message: message.to_string(),
                kind,
                position: position.unwrap_or_default(),
            })
        });
        let service = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            service.dismiss_toast(id);
        });
    }

    fn loading(&self, message: Option<&str>) {
        let dialog = Dialog {
            id: 0,
            kind: DialogKind::Loading,
            title: String::new(),
            message: message.unwrap_or(LOADING_MESSAGE).to_string(),
            confirm_label: String::new(),
            cancel_label: None,
            placeholder: None,
            value: String::new(),
        };
        let _ = self.open(dialog);
    }

    fn close(&self) {
        if let Some((_, tx)) = self.take_pending(None) {
            let _ = tx.send(DialogOutcome::Dismissed);
        }
        self.dialog.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use leptos::reactive::owner::Owner;

    fn confirm_dialog() -> Dialog {
        Dialog {
            id: 0,
            kind: DialogKind::Confirm,
            title: CONFIRM_TITLE.into(),
            message: "¿Seguro?".into(),
            confirm_label: CONFIRM_LABEL.into(),
            cancel_label: Some(CANCEL_LABEL.into()),
            placeholder: None,
            value: String::new(),
        }
    }

    #[test]
    fn test_respond_resolves_and_closes() {
        let owner = Owner::new();
        owner.set();
        let service = NotificationService::new();

        let (id, rx) = service.open(confirm_dialog());
        assert_eq!(service.dialog.get_untracked().map(|d| d.id), Some(id));

        service.respond(id, DialogOutcome::Confirmed);
        assert_eq!(block_on(rx), Ok(DialogOutcome::Confirmed));
        assert!(service.dialog.get_untracked().is_none());
    }

    #[test]
    fn test_new_dialog_dismisses_previous() {
        let owner = Owner::new();
        owner.set();
        let service = NotificationService::new();

        let (first, first_rx) = service.open(confirm_dialog());
        let (second, second_rx) = service.open(confirm_dialog());
        assert_ne!(first, second);
        assert_eq!(block_on(first_rx), Ok(DialogOutcome::Dismissed));

        // respuesta tardía al primero: sin efecto
        service.respond(first, DialogOutcome::Confirmed);
        assert_eq!(service.dialog.get_untracked().map(|d| d.id), Some(second));

        service.respond(second, DialogOutcome::Input("motivo".into()));
        assert_eq!(block_on(second_rx), Ok(DialogOutcome::Input("motivo".into())));
    }

    #[test]
    fn test_input_dialog_starts_with_initial_value() {
        let owner = Owner::new();
        owner.set();
        let service = NotificationService::new();

        let (answer, shown) = block_on(async {
            futures::join!(
                service.input_text_with_value("Registrar pago", "Monto", None, "12.50"),
                async {
                    let shown = service.dialog.get_untracked();
                    if let Some(dialog) = &shown {
                        service.respond(dialog.id, DialogOutcome::Input(dialog.value.clone()));
                    }
                    shown
                }
            )
        });
        let shown = shown.unwrap();
        assert_eq!(shown.kind, DialogKind::Input);
        assert_eq!(shown.value, "12.50");
        assert_eq!(answer.as_deref(), Some("12.50"));
    }

    #[test]
    fn test_close_dismisses_open_dialog() {
        let owner = Owner::new();
        owner.set();
        let service = NotificationService::new();

        service.loading(None);
        assert_eq!(
            service.dialog.get_untracked().map(|d| d.message),
            Some(LOADING_MESSAGE.to_string())
        );
        let (_, rx) = service.open(confirm_dialog());
        service.close();
        assert_eq!(block_on(rx), Ok(DialogOutcome::Dismissed));
        assert!(service.dialog.get_untracked().is_none());
    }
}
