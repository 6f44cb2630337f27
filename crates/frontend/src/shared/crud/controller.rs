//! Controlador genérico de una pantalla CRUD.
//!
//! Un `CrudController` guarda en señales la lista, el formulario del modal y
//! los indicadores de carga; la comunicación con el backend va por su
//! [`CrudSource`] y los avisos por su [`Notifier`].

use std::collections::BTreeSet;
use std::future::Future;

use contracts::domain::common::AggregateRoot;
use contracts::shared::metadata::{
    apply_input, field_text, validate_form, DeletePrompt, EntityMetadataInfo, FieldMetadata,
    SelectOption,
};
use contracts::shared::search::filter_list;
use leptos::prelude::*;

use super::source::{CrudSource, FormOptions, RequestOf};
use crate::shared::notifications::{
    NoticeKind, NotificationService, Notifier, DELETE_CONFIRM_LABEL,
};

pub const INCOMPLETE_FORM_TITLE: &str = "Formulario incompleto";
pub const CREATE_ERROR_TITLE: &str = "Error al crear";
pub const UPDATE_ERROR_TITLE: &str = "Error al actualizar";
pub const DELETE_ERROR_TITLE: &str = "Error al eliminar";

pub struct CrudController<S: CrudSource, N: 'static> {
    source: StoredValue<S>,
    notifier: StoredValue<N>,
    pub rows: RwSignal<Vec<S::Entity>>,
    pub options: RwSignal<FormOptions>,
    pub search: RwSignal<String>,
    pub modal_open: RwSignal<bool>,
    pub editing_id: RwSignal<Option<i64>>,
    pub form: RwSignal<RequestOf<S>>,
    /// Se marca al intentar guardar: muestra todos los errores
    pub touched: RwSignal<bool>,
    /// Campos editados desde que se abrió el modal
    pub dirty: RwSignal<BTreeSet<&'static str>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl<S: CrudSource, N: 'static> Clone for CrudController<S, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: CrudSource, N: 'static> Copy for CrudController<S, N> {}

/// Controlador de una página en el navegador
pub type PageController<S> = CrudController<S, NotificationService>;

impl<S> PageController<S>
where
    S: CrudSource,
{
    /// Crea el controlador con el servicio de avisos del contexto y carga la lista
    pub fn mount(source: S) -> Self {
        let notifier = use_context::<NotificationService>()
            .expect("NotificationService context not found");
        let ctrl = Self::new(source, notifier);
        leptos::task::spawn_local(async move { ctrl.load().await });
        ctrl
    }
}

impl<S, N> CrudController<S, N>
where
    S: CrudSource,
    N: Notifier + Clone + Send + Sync + 'static,
{
    pub fn new(source: S, notifier: N) -> Self {
        let form = source.default_request();
        Self {
            source: StoredValue::new(source),
            notifier: StoredValue::new(notifier),
            rows: RwSignal::new(Vec::new()),
            options: RwSignal::new(FormOptions::new()),
            search: RwSignal::new(String::new()),
            modal_open: RwSignal::new(false),
            editing_id: RwSignal::new(None),
            form: RwSignal::new(form),
            touched: RwSignal::new(false),
            dirty: RwSignal::new(BTreeSet::new()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    pub fn meta() -> EntityMetadataInfo {
        S::Entity::entity_metadata_info()
    }

    pub fn source(&self) -> S {
        self.source.get_value()
    }

    pub fn notifier(&self) -> N {
        self.notifier.get_value()
    }

    pub async fn load(&self) {
        let meta = Self::meta();
        self.loading.set(true);
        let result = self.source().load().await;
        self.loading.set(false);
        match result {
            Ok(loaded) => {
                self.rows.set(loaded.rows);
                self.options.set(loaded.options);
            }
            Err(e) => {
                log::error!("{}: carga fallida: {}", meta.entity_index, e);
                self.notifier()
                    .error(&e, Some(meta.load_error_title().as_str()))
                    .await;
            }
        }
    }

    /// Filas que pasan la búsqueda actual
    pub fn filtered(&self) -> Vec<S::Entity> {
        let term = self.search.get();
        self.rows.with(|rows| filter_list(rows, &term))
    }

    fn reset_form_state(&self) {
        self.touched.set(false);
        self.dirty.set(BTreeSet::new());
    }

    pub fn open_create(&self) {
        self.form.set(self.source.with_value(|s| s.default_request()));
        self.editing_id.set(None);
        self.reset_form_state();
        self.modal_open.set(true);
    }

    pub fn open_edit(&self, row: &S::Entity) {
        self.form.set(row.to_request());
        self.editing_id.set(row.id());
        self.reset_form_state();
        self.modal_open.set(true);
    }

    /// Como `open_edit`, salvo que la fila no admita edición
    pub async fn edit(&self, row: S::Entity) {
        match row.edit_guard() {
            Ok(()) => self.open_edit(&row),
            Err(message) => self.notifier().warning(message, None).await,
        }
    }

    pub fn close_modal(&self) {
        self.modal_open.set(false);
        self.editing_id.set(None);
        self.reset_form_state();
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.get().is_some()
    }

    pub fn modal_title(&self) -> String {
        let meta = Self::meta();
        if self.is_editing() {
            meta.edit_title()
        } else {
            meta.create_title()
        }
    }

    /// Aplica el texto de un input al campo `field` del formulario
    pub fn set_field(&self, field: &FieldMetadata, raw: &str) {
        let current = self.form.get_untracked();
        match apply_input(&current, field, raw) {
            Ok(mut next) => {
                S::Entity::recompute(&mut next);
                self.form.set(next);
            }
            Err(e) => log::warn!("{}: valor no aplicado ({}): {}", field.name, raw, e),
        }
        self.dirty.update(|dirty| {
            dirty.insert(field.name);
        });
    }

    pub fn update_form(&self, change: impl FnOnce(&mut RequestOf<S>)) {
        self.form.update(|form| {
            change(form);
            S::Entity::recompute(form);
        });
    }

    pub fn field_value(&self, name: &str) -> String {
        self.form.with(|form| field_text(form, name))
    }

    /// Error visible del campo: tras editarlo o tras intentar guardar
    pub fn field_error(&self, field: &FieldMetadata) -> Option<String> {
        let visible = self.touched.get() || self.dirty.with(|d| d.contains(field.name));
        if !visible {
            return None;
        }
        self.form
            .with(|form| validate_form(form, std::slice::from_ref(field)))
            .remove(field.name)
    }

    pub fn options_for(&self, field: &str) -> Vec<SelectOption> {
        self.options
            .with(|options| options.get(field).cloned().unwrap_or_default())
    }

    pub async fn submit(&self) {
        let meta = Self::meta();
        let form = self.form.get_untracked();

        if !validate_form(&form, S::Entity::field_metadata()).is_empty() {
            self.touched.set(true);
            self.notifier()
                .warning(meta.invalid_form, Some(INCOMPLETE_FORM_TITLE))
                .await;
            return;
        }
        if let Err(warning) = S::Entity::check(&form) {
            self.touched.set(true);
            self.notifier().warning(&warning.message, warning.title).await;
            return;
        }

        let source = self.source();
        self.saving.set(true);
        let (result, done, error_title) = match self.editing_id.get_untracked() {
            Some(id) => (
                source.update(id, &form).await,
                meta.updated_message(),
                UPDATE_ERROR_TITLE,
            ),
            None => (
                source.create(&form).await,
                meta.created_message(),
                CREATE_ERROR_TITLE,
            ),
        };
        self.saving.set(false);

        match result {
            Ok(()) => {
                self.close_modal();
                self.load().await;
                self.notifier().success(&done, None).await;
            }
            Err(e) => {
                log::error!("{}: guardado fallido: {}", meta.entity_index, e);
                self.notifier().error(&e, Some(error_title)).await;
            }
        }
    }

    pub async fn delete(&self, row: S::Entity) {
        let meta = Self::meta();
        let Some(id) = row.id() else {
            return;
        };
        let notifier = self.notifier();
        let confirmed = match row.delete_prompt() {
            DeletePrompt::Item(item) => notifier.confirm_delete(&item).await,
            DeletePrompt::Custom { message, title } => {
                notifier
                    .confirm(&message, Some(title), Some(DELETE_CONFIRM_LABEL), None)
                    .await
            }
        };
        if !confirmed {
            return;
        }

        match self.source().delete(id).await {
            Ok(()) => {
                notifier.toast(&meta.deleted_message(), NoticeKind::Success, None);
                self.load().await;
            }
            Err(e) => {
                log::error!("{}: borrado de {} fallido: {}", meta.entity_index, id, e);
                notifier.error(&e, Some(DELETE_ERROR_TITLE)).await;
            }
        }
    }

    /// Acción de ciclo de vida (confirmar, anular...): toast y recarga si va bien
    pub async fn run_action<F>(&self, action: F, success: &str, error_title: &str)
    where
        F: Future<Output = Result<(), String>>,
    {
        match action.await {
            Ok(()) => {
                self.notifier().toast(success, NoticeKind::Success, None);
                self.load().await;
            }
            Err(e) => {
                log::error!("{}: {}: {}", Self::meta().entity_index, error_title, e);
                self.notifier().error(&e, Some(error_title)).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::source::Loaded;
    use crate::shared::notifications::ToastPosition;
    use crate::shared::rest::ResourceDef;
    use async_trait::async_trait;
    use contracts::domain::a201_company::{self, Empresa, EmpresaRequest};
    use contracts::domain::a315_inventory_movement::{
        MovementState, MovimientoInventario, MovimientoInventarioRequest, EMPTY_LINES_MESSAGE,
    };
    use contracts::domain::a411_invoice_line::DetalleFactura;
    use contracts::shared::api_error::{ApiError, ErrorMessages};
    use futures::executor::block_on;
    use leptos::reactive::owner::Owner;
    use serde::de::DeserializeOwned;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Load,
        Create(String),
        Update(i64, String),
        Delete(i64),
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Notice {
        Success(String),
        Error(String, Option<String>),
        Warning(String, Option<String>),
        Confirm(String),
        Toast(String),
    }

    /// Fuente en memoria que registra cada llamada
    struct FakeSource<T: AggregateRoot> {
        rows: Arc<Mutex<Vec<T>>>,
        calls: Arc<Mutex<Vec<Call>>>,
        fail_load: Arc<Mutex<Option<String>>>,
        fail_delete: Arc<Mutex<Option<String>>>,
    }

    impl<T: AggregateRoot> Clone for FakeSource<T> {
        fn clone(&self) -> Self {
            Self {
                rows: self.rows.clone(),
                calls: self.calls.clone(),
                fail_load: self.fail_load.clone(),
                fail_delete: self.fail_delete.clone(),
            }
        }
    }

    impl<T: AggregateRoot> FakeSource<T> {
        fn new(rows: Vec<T>) -> Self {
            Self {
                rows: Arc::new(Mutex::new(rows)),
                calls: Arc::new(Mutex::new(Vec::new())),
                fail_load: Arc::new(Mutex::new(None)),
                fail_delete: Arc::new(Mutex::new(None)),
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }
    }

    struct FakeResource<T>(std::marker::PhantomData<T>);

    impl<T: AggregateRoot + DeserializeOwned> ResourceDef for FakeResource<T> {
        type Response = T;
        type Request = T::Request;
        const PATH: &'static str = "/fake";
        const MESSAGES: ErrorMessages = ErrorMessages::not_found("No encontrado");
    }

    #[async_trait(?Send)]
    impl<T: AggregateRoot + DeserializeOwned> CrudSource for FakeSource<T> {
        type Entity = T;
        type Resource = FakeResource<T>;

        async fn load(&self) -> Result<Loaded<T>, String> {
            self.record(Call::Load);
            if let Some(e) = self.fail_load.lock().unwrap().clone() {
                return Err(e);
            }
            Ok(Loaded::rows(self.rows.lock().unwrap().clone()))
        }

        async fn create(&self, request: &T::Request) -> Result<(), String> {
            self.record(Call::Create(serde_json::to_string(request).unwrap()));
            Ok(())
        }

        async fn update(&self, id: i64, request: &T::Request) -> Result<(), String> {
            self.record(Call::Update(id, serde_json::to_string(request).unwrap()));
            Ok(())
        }

        async fn delete(&self, id: i64) -> Result<(), String> {
            self.record(Call::Delete(id));
            match self.fail_delete.lock().unwrap().clone() {
                Some(e) => Err(e),
                None => Ok(()),
            }
        }
    }

    #[derive(Clone, Default)]
    struct FakeNotifier {
        log: Arc<Mutex<Vec<Notice>>>,
        answer: Arc<Mutex<bool>>,
    }

    impl FakeNotifier {
        fn answering(answer: bool) -> Self {
            let notifier = Self::default();
            *notifier.answer.lock().unwrap() = answer;
            notifier
        }

        fn log(&self) -> Vec<Notice> {
            self.log.lock().unwrap().clone()
        }

        fn push(&self, notice: Notice) {
            self.log.lock().unwrap().push(notice);
        }
    }

    #[async_trait(?Send)]
    impl Notifier for FakeNotifier {
        async fn success(&self, message: &str, _title: Option<&str>) {
            self.push(Notice::Success(message.into()));
        }

        async fn error(&self, message: &str, title: Option<&str>) {
            self.push(Notice::Error(message.into(), title.map(str::to_string)));
        }

        async fn warning(&self, message: &str, title: Option<&str>) {
            self.push(Notice::Warning(message.into(), title.map(str::to_string)));
        }

        async fn info(&self, _message: &str, _title: Option<&str>) {}

        async fn confirm(
            &self,
            message: &str,
            _title: Option<&str>,
            _confirm_label: Option<&str>,
            _cancel_label: Option<&str>,
        ) -> bool {
            self.push(Notice::Confirm(message.into()));
            *self.answer.lock().unwrap()
        }

        async fn input_text_with_value(
            &self,
            _: &str,
            _: &str,
            _: Option<&str>,
            _: &str,
        ) -> Option<String> {
            None
        }

        fn toast(&self, message: &str, _kind: NoticeKind, _position: Option<ToastPosition>) {
            self.push(Notice::Toast(message.into()));
        }

        fn loading(&self, _message: Option<&str>) {}

        fn close(&self) {}
    }

    fn acme() -> Empresa {
        Empresa {
            id: 7,
            nit: "1234567890001".into(),
            nombre: "Acme".into(),
            direccion: "Av. X".into(),
            telefono: "0999999999".into(),
            email: "a@acme.com".into(),
            ..Empresa::default()
        }
    }

    fn setup<T: AggregateRoot + DeserializeOwned>(
        rows: Vec<T>,
        answer: bool,
    ) -> (
        Owner,
        CrudController<FakeSource<T>, FakeNotifier>,
        FakeSource<T>,
        FakeNotifier,
    ) {
        let owner = Owner::new();
        owner.set();
        let source = FakeSource::new(rows);
        let notifier = FakeNotifier::answering(answer);
        let ctrl = CrudController::new(source.clone(), notifier.clone());
        (owner, ctrl, source, notifier)
    }

    #[test]
    fn test_edit_without_changes_sends_same_fields() {
        let (_owner, ctrl, source, _) = setup(vec![acme()], true);
        block_on(ctrl.load());

        ctrl.open_edit(&acme());
        assert_eq!(ctrl.form.get_untracked(), acme().to_request());
        assert_eq!(ctrl.editing_id.get_untracked(), Some(7));

        block_on(ctrl.submit());
        let expected = serde_json::to_string(&acme().to_request()).unwrap();
        let updates: Vec<Call> = source
            .calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Update(..)))
            .collect();
        assert_eq!(updates, vec![Call::Update(7, expected)]);
    }

    #[test]
    fn test_invalid_create_warns_once() {
        let (_owner, ctrl, source, notifier) = setup(Vec::<Empresa>::new(), true);

        ctrl.open_create();
        block_on(ctrl.submit());

        assert!(source.calls().is_empty());
        assert_eq!(
            notifier.log(),
            vec![Notice::Warning(
                a201_company::ENTITY_METADATA.invalid_form.into(),
                Some(INCOMPLETE_FORM_TITLE.into())
            )]
        );
        assert!(ctrl.touched.get_untracked());
        assert!(ctrl.modal_open.get_untracked());
    }

    #[test]
    fn test_create_company_flow() {
        let (_owner, ctrl, source, notifier) = setup(Vec::<Empresa>::new(), true);

        ctrl.open_create();
        ctrl.form.set(EmpresaRequest {
            nit: "1234567890001".into(),
            nombre: "Acme".into(),
            direccion: "Av. X".into(),
            telefono: "0999999999".into(),
            email: "a@acme.com".into(),
        });
        block_on(ctrl.submit());

        let body = serde_json::to_string(&ctrl.form.get_untracked()).unwrap();
        assert_eq!(source.calls(), vec![Call::Create(body), Call::Load]);
        assert_eq!(
            notifier.log(),
            vec![Notice::Success("Empresa creada exitosamente".into())]
        );
        assert!(!ctrl.modal_open.get_untracked());
    }

    #[test]
    fn test_delete_declined_does_nothing() {
        let (_owner, ctrl, source, notifier) = setup(vec![acme()], false);
        block_on(ctrl.load());

        block_on(ctrl.delete(acme()));

        assert_eq!(source.calls(), vec![Call::Load]);
        assert_eq!(ctrl.rows.get_untracked(), vec![acme()]);
        assert!(matches!(notifier.log().as_slice(), [Notice::Confirm(m)] if m.contains("Acme")));
    }

    #[test]
    fn test_delete_not_found_keeps_rows() {
        let (_owner, ctrl, source, notifier) = setup(vec![acme()], true);
        block_on(ctrl.load());
        let not_found = ApiError::NotFound.user_message(&a201_company::ENTITY_METADATA.messages);
        *source.fail_delete.lock().unwrap() = Some(not_found.clone());

        block_on(ctrl.delete(acme()));

        assert_eq!(source.calls(), vec![Call::Load, Call::Delete(7)]);
        assert_eq!(ctrl.rows.get_untracked(), vec![acme()]);
        assert_eq!(
            notifier.log().last(),
            Some(&Notice::Error(
                "Empresa no encontrada".into(),
                Some(DELETE_ERROR_TITLE.into())
            ))
        );
    }

    #[test]
    fn test_delete_confirmed_toasts_and_reloads() {
        let (_owner, ctrl, source, notifier) = setup(vec![acme()], true);

        block_on(ctrl.delete(acme()));

        assert_eq!(source.calls(), vec![Call::Delete(7), Call::Load]);
        assert_eq!(
            notifier.log().last(),
            Some(&Notice::Toast("Empresa eliminada exitosamente".into()))
        );
    }

    #[test]
    fn test_run_action_success_toasts_and_reloads() {
        let (_owner, ctrl, source, notifier) = setup(vec![acme()], true);

        block_on(ctrl.run_action(
            async { Ok::<(), String>(()) },
            "Movimiento confirmado exitosamente",
            "Error al confirmar",
        ));

        assert_eq!(source.calls(), vec![Call::Load]);
        assert_eq!(ctrl.rows.get_untracked(), vec![acme()]);
        assert_eq!(
            notifier.log(),
            vec![Notice::Toast("Movimiento confirmado exitosamente".into())]
        );
    }

    #[test]
    fn test_run_action_failure_reports_without_reload() {
        let (_owner, ctrl, source, notifier) = setup(vec![acme()], true);

        block_on(ctrl.run_action(
            async { Err::<(), String>("Solo se pueden anular movimientos confirmados".into()) },
            "Movimiento anulado exitosamente",
            "Error al anular",
        ));

        assert!(source.calls().is_empty());
        assert!(ctrl.rows.get_untracked().is_empty());
        assert_eq!(
            notifier.log(),
            vec![Notice::Error(
                "Solo se pueden anular movimientos confirmados".into(),
                Some("Error al anular".into())
            )]
        );
    }

    #[test]
    fn test_load_error_keeps_previous_rows() {
        let (_owner, ctrl, source, notifier) = setup(vec![acme()], true);
        block_on(ctrl.load());
        *source.fail_load.lock().unwrap() = Some("sin conexión".into());

        block_on(ctrl.load());

        assert_eq!(ctrl.rows.get_untracked(), vec![acme()]);
        assert_eq!(
            notifier.log(),
            vec![Notice::Error(
                "sin conexión".into(),
                Some("Error al cargar empresas".into())
            )]
        );
        assert!(!ctrl.loading.get_untracked());
    }

    #[test]
    fn test_search_filter() {
        let other = Empresa {
            id: 8,
            nombre: "Beta".into(),
            nit: "999".into(),
            ..Empresa::default()
        };
        let (_owner, ctrl, _, _) = setup(vec![acme(), other.clone()], true);
        block_on(ctrl.load());

        assert_eq!(ctrl.filtered().len(), 2);
        ctrl.search.set("acm".into());
        assert_eq!(ctrl.filtered(), vec![acme()]);
        ctrl.search.set("zzz".into());
        assert!(ctrl.filtered().is_empty());
    }

    #[test]
    fn test_movement_without_lines_is_rejected() {
        let (_owner, ctrl, source, notifier) =
            setup(Vec::<MovimientoInventario>::new(), true);

        ctrl.open_create();
        ctrl.update_form(|form: &mut MovimientoInventarioRequest| {
            form.numero_movimiento = "MOV-001".into();
            form.tipo_movimiento_id = 1;
            form.fecha_movimiento = "2024-05-01T10:30".into();
            form.detalles.remove_line(0);
        });
        block_on(ctrl.submit());

        assert!(source.calls().is_empty());
        assert!(matches!(
            notifier.log().as_slice(),
            [Notice::Warning(m, _)] if m == EMPTY_LINES_MESSAGE
        ));
    }

    #[test]
    fn test_non_draft_movement_is_not_editable() {
        let movement = MovimientoInventario {
            id: 3,
            estado: MovementState::Confirmado,
            ..MovimientoInventario::default()
        };
        let (_owner, ctrl, _, notifier) = setup(vec![movement.clone()], true);

        block_on(ctrl.edit(movement));

        assert!(!ctrl.modal_open.get_untracked());
        assert!(matches!(notifier.log().as_slice(), [Notice::Warning(..)]));
    }

    #[test]
    fn test_set_field_recomputes_line() {
        let (_owner, ctrl, _, _) = setup(Vec::<DetalleFactura>::new(), true);
        let fields = DetalleFactura::field_metadata();
        let field = |name: &str| *fields.iter().find(|f| f.name == name).unwrap();

        ctrl.open_create();
        ctrl.set_field(&field("cantidad"), "2");
        ctrl.set_field(&field("precioUnitario"), "10");

        let form = ctrl.form.get_untracked();
        assert_eq!(form.subtotal, 20.0);
        assert_eq!(form.total, 20.0);
        assert!(ctrl.dirty.get_untracked().contains("cantidad"));
        assert_eq!(ctrl.field_value("cantidad"), "2");
    }
}
