use std::collections::HashMap;
use std::marker::PhantomData;

use async_trait::async_trait;
use contracts::domain::common::AggregateRoot;
use contracts::shared::metadata::SelectOption;
use leptos::prelude::*;

use crate::shared::rest::{ResourceDef, RestResource};

/// Opciones de los selects del formulario, por nombre de campo
pub type FormOptions = HashMap<&'static str, Vec<SelectOption>>;

pub type RequestOf<S> = <<S as CrudSource>::Entity as AggregateRoot>::Request;

/// Lo que una pantalla carga de una vez: filas y listas de selección
#[derive(Debug, Clone, Default)]
pub struct Loaded<T> {
    pub rows: Vec<T>,
    pub options: FormOptions,
}

impl<T> Loaded<T> {
    pub fn rows(rows: Vec<T>) -> Self {
        Self {
            rows,
            options: FormOptions::new(),
        }
    }

    pub fn with_options(
        mut self,
        field: &'static str,
        options: impl IntoIterator<Item = SelectOption>,
    ) -> Self {
        self.options.insert(field, options.into_iter().collect());
        self
    }
}

/// Origen de datos de una pantalla CRUD.
///
/// Solo `load` es obligatorio: las escrituras van por defecto al
/// [`RestResource`] de `Resource`.
#[async_trait(?Send)]
pub trait CrudSource: Clone + Send + Sync + 'static {
    type Entity: AggregateRoot;
    type Resource: ResourceDef<Request = RequestOf<Self>>;

    async fn load(&self) -> Result<Loaded<Self::Entity>, String>;

    async fn create(&self, request: &RequestOf<Self>) -> Result<(), String> {
        RestResource::<Self::Resource>::new()
            .save(request)
            .await
            .map(|_| ())
    }

    async fn update(&self, id: i64, request: &RequestOf<Self>) -> Result<(), String> {
        RestResource::<Self::Resource>::new()
            .update(id, request)
            .await
            .map(|_| ())
    }

    async fn delete(&self, id: i64) -> Result<(), String> {
        RestResource::<Self::Resource>::new().delete(id).await
    }

    /// Formulario de alta
    fn default_request(&self) -> RequestOf<Self> {
        RequestOf::<Self>::default()
    }
}

/// Fuente sin joins: la respuesta del recurso ya es la fila de la lista
pub struct RestSource<R> {
    _marker: PhantomData<fn() -> R>,
}

impl<R> RestSource<R> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<R> Default for RestSource<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for RestSource<R> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<R> Copy for RestSource<R> {}

#[async_trait(?Send)]
impl<R> CrudSource for RestSource<R>
where
    R: ResourceDef,
    R::Response: AggregateRoot<Request = R::Request>,
{
    type Entity = R::Response;
    type Resource = R;

    async fn load(&self) -> Result<Loaded<R::Response>, String> {
        RestResource::<R>::new().find_all().await.map(Loaded::rows)
    }
}

/// Opciones `id → etiqueta` a partir de una lista
pub fn options<T>(
    items: &[T],
    id: impl Fn(&T) -> i64,
    label: impl Fn(&T) -> String,
) -> Vec<SelectOption> {
    items
        .iter()
        .map(|item| SelectOption::new(id(item), label(item)))
        .collect()
}

/// Como [`RestSource`], con un listado alternativo elegido en la barra
/// (`/activos`, `/vigentes`...). Cadena vacía: `find_all`.
pub struct ScopedSource<R> {
    pub scope: RwSignal<&'static str>,
    _marker: PhantomData<fn() -> R>,
}

impl<R> ScopedSource<R> {
    pub fn new() -> Self {
        Self {
            scope: RwSignal::new(""),
            _marker: PhantomData,
        }
    }
}

impl<R> Clone for ScopedSource<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ScopedSource<R> {}

#[async_trait(?Send)]
impl<R> CrudSource for ScopedSource<R>
where
    R: ResourceDef,
    R::Response: AggregateRoot<Request = R::Request>,
{
    type Entity = R::Response;
    type Resource = R;

    async fn load(&self) -> Result<Loaded<R::Response>, String> {
        scoped_list::<R>(self.scope.get_untracked()).await.map(Loaded::rows)
    }
}

/// `find_all` con `scope` vacío; si no, `GET {scope}`
pub async fn scoped_list<R: ResourceDef>(scope: &str) -> Result<Vec<R::Response>, String> {
    let api = RestResource::<R>::new();
    match scope {
        "" => api.find_all().await,
        path => api.get_list(path).await,
    }
}

/// `GET {prefix}/{id}` con filtro, `find_all` sin él
pub async fn list_by<R: ResourceDef>(prefix: &str, id: Option<i64>) -> Result<Vec<R::Response>, String> {
    let api = RestResource::<R>::new();
    match id {
        Some(id) => api.get_list(&format!("{}/{}", prefix, id)).await,
        None => api.find_all().await,
    }
}
