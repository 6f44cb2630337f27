//! Pantalla CRUD estándar: cabecera, búsqueda, tabla y modal de formulario.

use std::future::Future;
use std::sync::Arc;

use contracts::domain::common::{format_date, AggregateRoot};
use contracts::shared::metadata::FieldMetadata;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::controller::PageController;
use super::form::form_fields;
use super::source::CrudSource;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::notifications::Notifier;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};

type CellFn<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;
type RowFn<T, R> = Arc<dyn Fn(&T) -> R + Send + Sync>;

pub const EMPTY_LIST: &str = "No se encontraron registros";
pub const LOADING_LIST: &str = "Cargando...";

/// Columna de la tabla
pub struct Column<T> {
    pub title: &'static str,
    pub min_width: f64,
    render: CellFn<T>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            title: self.title,
            min_width: self.min_width,
            render: self.render.clone(),
        }
    }
}

impl<T: 'static> Column<T> {
    pub fn custom(
        title: &'static str,
        render: impl Fn(&T) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        Self {
            title,
            min_width: 100.0,
            render: Arc::new(render),
        }
    }

    pub fn text(title: &'static str, value: fn(&T) -> String) -> Self {
        Self::custom(title, move |row| value(row).into_any())
    }

    /// Texto; `-` si está vacío
    pub fn opt_text(title: &'static str, value: fn(&T) -> Option<String>) -> Self {
        Self::custom(title, move |row| {
            value(row)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "-".to_string())
                .into_any()
        })
    }

    pub fn number(title: &'static str, value: fn(&T) -> String) -> Self {
        Self::number_with(title, value)
    }

    pub fn money(title: &'static str, value: fn(&T) -> f64) -> Self {
        Self::number_with(title, move |row| format_money(value(row)))
    }

    fn number_with(
        title: &'static str,
        value: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self::custom(title, move |row| {
            view! { <span class="cell--number">{value(row)}</span> }.into_any()
        })
    }

    pub fn date(title: &'static str, value: fn(&T) -> Option<String>) -> Self {
        Self::custom(title, move |row| match value(row) {
            Some(date) if !date.is_empty() => format_date(&date).into_any(),
            _ => "-".into_any(),
        })
    }

    /// Activo / Inactivo
    pub fn flag(title: &'static str, value: fn(&T) -> bool) -> Self {
        Self::custom(title, move |row| {
            let (label, class) = if value(row) {
                ("Activo", "badge-success")
            } else {
                ("Inactivo", "badge-secondary")
            };
            badge(label, class)
        })
    }

    /// Sí / No
    pub fn yes_no(title: &'static str, value: fn(&T) -> bool) -> Self {
        Self::custom(title, move |row| {
            let (label, class) = if value(row) {
                ("Sí", "badge-info")
            } else {
                ("No", "badge-secondary")
            };
            badge(label, class)
        })
    }

    /// `(texto, clase css)` pintado como badge
    pub fn badge(title: &'static str, value: fn(&T) -> (String, &'static str)) -> Self {
        Self::custom(title, move |row| {
            let (label, class) = value(row);
            badge(label, class)
        })
    }

    pub fn min_width(self, min_width: f64) -> Self {
        Self { min_width, ..self }
    }
}

/// Color de thaw para las clases `badge-*`
pub fn badge_color(class: &str) -> BadgeColor {
    match class {
        "badge-success" => BadgeColor::Success,
        "badge-danger" => BadgeColor::Danger,
        "badge-warning" => BadgeColor::Warning,
        "badge-info" => BadgeColor::Informative,
        "badge-primary" => BadgeColor::Brand,
        _ => BadgeColor::Subtle,
    }
}

pub fn badge(label: impl Into<String>, class: &'static str) -> AnyView {
    let label = label.into();
    view! {
        <Badge appearance=BadgeAppearance::Tint color=badge_color(class)>{label}</Badge>
    }
    .into_any()
}

/// Botón pequeño de una fila; el clic no llega a la fila
pub fn row_button(
    icon_name: &'static str,
    title: &'static str,
    on_click: impl Fn() + Send + Sync + 'static,
) -> AnyView {
    view! {
        <Button
            appearance=ButtonAppearance::Transparent
            size=ButtonSize::Small
            attr:title=title
            on_click=move |e: ev::MouseEvent| {
                e.stop_propagation();
                on_click();
            }
        >
            {icon(icon_name)}
        </Button>
    }
    .into_any()
}

pub const LOOKUP_NOT_FOUND_TITLE: &str = "No encontrado";

/// Búsqueda exacta en el servidor (`/codigo/{c}`, `/nit/{nit}`...);
/// si la fila existe se abre en edición.
pub fn lookup_box<S, F, Fut>(ctrl: PageController<S>, placeholder: &'static str, fetch: F) -> AnyView
where
    S: CrudSource,
    F: Fn(String) -> Fut + Copy + Send + Sync + 'static,
    Fut: Future<Output = Result<S::Entity, String>> + 'static,
{
    let code = RwSignal::new(String::new());
    let run = move || {
        let value = code.get_untracked().trim().to_string();
        if value.is_empty() {
            return;
        }
        spawn_local(async move {
            match fetch(value).await {
                Ok(row) => ctrl.edit(row).await,
                Err(e) => ctrl.notifier().error(&e, Some(LOOKUP_NOT_FOUND_TITLE)).await,
            }
        });
    };

    view! {
        <div class="lookup-box">
            <input
                class="lookup-box__input"
                placeholder=placeholder
                prop:value=move || code.get()
                on:input=move |ev| code.set(event_target_value(&ev))
                on:keydown=move |ev: ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        run();
                    }
                }
            />
            <Button appearance=ButtonAppearance::Subtle on_click=move |_| run()>
                {icon("search")}
            </Button>
        </div>
    }
    .into_any()
}

/// Selector del listado del servidor (`Todos`, `/activos`...); recarga al cambiar
pub fn scope_select<S: CrudSource>(
    ctrl: PageController<S>,
    scope: RwSignal<&'static str>,
    choices: &'static [(&'static str, &'static str)],
) -> AnyView {
    view! {
        <select
            class="filter-panel__select"
            on:change=move |ev| {
                let value = event_target_value(&ev);
                let path = choices
                    .iter()
                    .find(|(path, _)| *path == value)
                    .map(|(path, _)| *path)
                    .unwrap_or("");
                scope.set(path);
                spawn_local(async move { ctrl.load().await });
            }
        >
            {choices
                .iter()
                .map(|(path, label)| {
                    let path = *path;
                    view! {
                        <option value=path selected=move || scope.get() == path>
                            {*label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
    .into_any()
}

/// Filtro por una referencia, con las opciones ya cargadas para `field`;
/// recarga al cambiar.
pub fn ref_filter<S: CrudSource>(
    ctrl: PageController<S>,
    field: &'static str,
    all_label: &'static str,
    selected: RwSignal<Option<i64>>,
) -> AnyView {
    view! {
        <select
            class="filter-panel__select"
            on:change=move |ev| {
                selected.set(event_target_value(&ev).parse().ok());
                spawn_local(async move { ctrl.load().await });
            }
        >
            <option value="">{all_label}</option>
            {move || {
                ctrl.options_for(field)
                    .into_iter()
                    .map(|opt| {
                        let value = opt.value;
                        view! {
                            <option value=value.to_string() selected=move || selected.get() == Some(value)>
                                {opt.label}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
    .into_any()
}

/// Configuración de una pantalla CRUD.
///
/// ```ignore
/// CrudPage::new(ctrl)
///     .column(Column::text("Nombre", |e: &Empresa| e.nombre.clone()))
///     .view()
/// ```
pub struct CrudPage<S: CrudSource> {
    ctrl: PageController<S>,
    columns: Vec<Column<S::Entity>>,
    fields: &'static [FieldMetadata],
    read_only: bool,
    deletable: bool,
    toolbar: Option<AnyView>,
    before_table: Option<AnyView>,
    after_table: Option<AnyView>,
    row_filter: Option<RowFn<S::Entity, bool>>,
    row_actions: Option<CellFn<S::Entity>>,
    row_click: Option<RowFn<S::Entity, ()>>,
    row_class: Option<RowFn<S::Entity, &'static str>>,
    form_extra: Option<Arc<dyn Fn() -> AnyView + Send + Sync>>,
    locked: Signal<bool>,
}

impl<S: CrudSource> CrudPage<S> {
    pub fn new(ctrl: PageController<S>) -> Self {
        Self {
            ctrl,
            columns: Vec::new(),
            fields: S::Entity::field_metadata(),
            read_only: false,
            deletable: true,
            toolbar: None,
            before_table: None,
            after_table: None,
            row_filter: None,
            row_actions: None,
            row_click: None,
            row_class: None,
            form_extra: None,
            locked: Signal::stored(false),
        }
    }

    pub fn column(mut self, column: Column<S::Entity>) -> Self {
        self.columns.push(column);
        self
    }

    /// Campos del modal, si no son todos los de la entidad
    pub fn fields(mut self, fields: &'static [FieldMetadata]) -> Self {
        self.fields = fields;
        self
    }

    /// Sin alta, edición ni borrado
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn without_delete(mut self) -> Self {
        self.deletable = false;
        self
    }

    pub fn toolbar(mut self, view: impl IntoView + 'static) -> Self {
        self.toolbar = Some(view.into_any());
        self
    }

    pub fn before_table(mut self, view: impl IntoView + 'static) -> Self {
        self.before_table = Some(view.into_any());
        self
    }

    pub fn after_table(mut self, view: impl IntoView + 'static) -> Self {
        self.after_table = Some(view.into_any());
        self
    }

    /// Filtro extra sobre el resultado de la búsqueda (estado, pestañas...)
    pub fn row_filter(mut self, filter: impl Fn(&S::Entity) -> bool + Send + Sync + 'static) -> Self {
        self.row_filter = Some(Arc::new(filter));
        self
    }

    /// Botones antes de editar/eliminar
    pub fn row_actions(
        mut self,
        actions: impl Fn(&S::Entity) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        self.row_actions = Some(Arc::new(actions));
        self
    }

    pub fn on_row_click(mut self, click: impl Fn(&S::Entity) + Send + Sync + 'static) -> Self {
        self.row_click = Some(Arc::new(click));
        self
    }

    pub fn row_class(
        mut self,
        class: impl Fn(&S::Entity) -> &'static str + Send + Sync + 'static,
    ) -> Self {
        self.row_class = Some(Arc::new(class));
        self
    }

    /// Contenido extra al final del formulario
    pub fn form_extra(mut self, extra: impl Fn() -> AnyView + Send + Sync + 'static) -> Self {
        self.form_extra = Some(Arc::new(extra));
        self
    }

    /// Deshabilita todos los campos del modal mientras sea `true`
    pub fn lock_form(mut self, locked: Signal<bool>) -> Self {
        self.locked = locked;
        self
    }

    pub fn view(self) -> impl IntoView {
        let Self {
            ctrl,
            columns,
            fields,
            read_only,
            deletable,
            toolbar,
            before_table,
            after_table,
            row_filter,
            row_actions,
            row_click,
            row_class,
            form_extra,
            locked,
        } = self;

        let meta = PageController::<S>::meta();
        let columns = Arc::new(columns);
        let has_actions = !read_only || row_actions.is_some();
        let colspan = (columns.len() + usize::from(has_actions)).to_string();
        let search_placeholder = format!("Buscar {}...", meta.ui.list_name.to_lowercase());

        let reload = move || spawn_local(async move { ctrl.load().await });

        let visible_rows = move || {
            let rows = ctrl.filtered();
            match &row_filter {
                Some(filter) => rows.into_iter().filter(|r| filter(r)).collect(),
                None => rows,
            }
        };

        let header_cells = columns
            .iter()
            .map(|column| {
                let title = column.title;
                view! {
                    <TableHeaderCell resizable=true min_width=column.min_width>
                        {title}
                    </TableHeaderCell>
                }
            })
            .collect_view();

        let count_rows = visible_rows.clone();
        let body_columns = columns.clone();
        let body_colspan = colspan.clone();
        let body = move || {
            let body_colspan = body_colspan.clone();
            if ctrl.loading.get() && ctrl.rows.with(Vec::is_empty) {
                return view! {
                    <TableRow>
                        <TableCell attr:colspan=body_colspan.clone() attr:style="padding: 40px; text-align: center;">
                            <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                                <Spinner />
                                {LOADING_LIST}
                            </Flex>
                        </TableCell>
                    </TableRow>
                }
                .into_any();
            }

            let rows: Vec<S::Entity> = visible_rows();
            if rows.is_empty() {
                return view! {
                    <TableRow>
                        <TableCell attr:colspan=body_colspan.clone() attr:style="padding: 40px; text-align: center; color: var(--colorNeutralForeground3);">
                            {EMPTY_LIST}
                        </TableCell>
                    </TableRow>
                }
                .into_any();
            }

            rows.into_iter()
                .map(|row| {
                    let cells = body_columns
                        .iter()
                        .map(|column| {
                            let cell = (column.render)(&row);
                            view! { <TableCell>{cell}</TableCell> }
                        })
                        .collect_view();

                    let extra = row_actions.as_ref().map(|actions| actions(&row));
                    let standard = (!read_only).then(|| {
                        let for_edit = row.clone();
                        let for_delete = row.clone();
                        view! {
                            {row_button("edit", "Editar", move || {
                                let row = for_edit.clone();
                                spawn_local(async move { ctrl.edit(row).await });
                            })}
                            {deletable.then(|| row_button("trash", "Eliminar", move || {
                                let row = for_delete.clone();
                                spawn_local(async move { ctrl.delete(row).await });
                            }))}
                        }
                    });
                    let actions_cell = has_actions.then(|| {
                        view! {
                            <TableCell>
                                <div class="table__actions">{extra}{standard}</div>
                            </TableCell>
                        }
                    });

                    let class = row_class.as_ref().map(|f| f(&row)).unwrap_or_default();
                    let click = row_click.clone();
                    let for_click = row.clone();
                    view! {
                        <TableRow
                            attr:class=class
                            on:click=move |_| {
                                if let Some(click) = &click {
                                    click(&for_click);
                                }
                            }
                        >
                            {cells}
                            {actions_cell}
                        </TableRow>
                    }
                })
                .collect_view()
                .into_any()
        };

        let modal = move || {
            if !ctrl.modal_open.get() {
                return None;
            }
            let extra = form_extra.as_ref().map(|extra| extra());
            let save = move |_| spawn_local(async move { ctrl.submit().await });
            let saving = ctrl.saving;
            Some(view! {
                <ModalFrame
                    on_close=Callback::new(move |_| ctrl.close_modal())
                    modal_class="crud-modal"
                >
                    <div class="details-container">
                        <div class="details-header">
                            <h3>{move || ctrl.modal_title()}</h3>
                        </div>
                        <div class="details-form">
                            {form_fields(ctrl, fields, locked)}
                            {extra}
                        </div>
                        <div class="details-actions">
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=save
                                disabled=Signal::derive(move || saving.get() || locked.get())
                            >
                                {icon("check")}
                                {move || if ctrl.is_editing() { "Actualizar" } else { "Crear" }}
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| ctrl.close_modal()
                            >
                                {icon("x")}
                                "Cancelar"
                            </Button>
                        </div>
                    </div>
                </ModalFrame>
            })
        };

        view! {
            <PageFrame page_id=page_id(meta.entity_index, PAGE_CAT_LIST) category=PAGE_CAT_LIST>
                <div class="page__header">
                    <div class="page__header-left">
                        {icon(meta.ui.icon)}
                        <h1 class="page__title">{meta.ui.list_name}</h1>
                    </div>
                    <div class="page__header-right">
                        {toolbar}
                        {(!read_only).then(|| view! {
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| ctrl.open_create()>
                                {icon("plus")}
                                "Nuevo"
                            </Button>
                        })}
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| reload()
                            disabled=ctrl.loading
                        >
                            {icon("refresh")}
                            "Actualizar"
                        </Button>
                    </div>
                </div>

                <div class="page__content">
                    <Flex align=FlexAlign::Center gap=FlexGap::Medium class="filter-panel">
                        <div style="width: 350px;">
                            <Input value=ctrl.search placeholder=search_placeholder />
                        </div>
                        <span class="filter-panel__count">
                            {move || format!("{} de {} registros", count_rows().len(), ctrl.rows.with(Vec::len))}
                        </span>
                    </Flex>

                    {before_table}

                    <Table>
                        <TableHeader>
                            <TableRow>
                                {header_cells}
                                {has_actions.then(|| view! {
                                    <TableHeaderCell attr:style="width: 140px;">"Acciones"</TableHeaderCell>
                                })}
                            </TableRow>
                        </TableHeader>
                        <TableBody>{body}</TableBody>
                    </Table>

                    {after_table}
                </div>

                {modal}
            </PageFrame>
        }
    }
}
