//! Cliente REST genérico por recurso.
//!
//! Cada recurso declara su ruta y sus textos de error en un [`ResourceDef`];
//! [`RestResource`] ofrece el CRUD estándar más ayudas para las consultas y
//! acciones específicas de cada entidad.
//!
//! ```ignore
//! pub struct EmpresaApi;
//!
//! impl ResourceDef for EmpresaApi {
//!     type Response = Empresa;
//!     type Request = EmpresaRequest;
//!     const PATH: &'static str = "/empresa";
//!     const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
//! }
//!
//! let empresas = RestResource::<EmpresaApi>::new().find_all().await?;
//! ```

use std::future::Future;
use std::marker::PhantomData;

use contracts::shared::api_error::{ApiError, ErrorMessages};
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_utils::{api_url, ApiBase};

pub trait ResourceDef: 'static {
    type Response: DeserializeOwned + 'static;
    type Request: Serialize + 'static;

    /// Ruta relativa a la base, p. ej. `/ventas/clientes`
    const PATH: &'static str;
    const MESSAGES: ErrorMessages;
    const BASE: ApiBase = ApiBase::Private;
    /// Reintentos extra de las lecturas
    const RETRIES: u32 = 1;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Verb {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    fn builder(&self, url: &str) -> RequestBuilder {
        match self {
            Self::Get => Request::get(url),
            Self::Post => Request::post(url),
            Self::Put => Request::put(url),
            Self::Patch => Request::patch(url),
            Self::Delete => Request::delete(url),
        }
    }
}

async fn send(verb: Verb, url: &str, body: Option<String>) -> Result<String, ApiError> {
    let builder = verb.builder(url).header("Accept", "application/json");
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(json),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    if !response.ok() {
        return Err(ApiError::from_status(status, &text));
    }
    Ok(text)
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Repite `op` hasta `retries` veces más mientras el error sea transitorio
pub async fn with_retries<T, F, Fut>(retries: u32, label: &str, mut op: F) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut attempt = 0;
    loop {
        match op().await {
            Err(error) if attempt < retries && error.is_retryable() => {
                attempt += 1;
                log::warn!("{}: reintento {}/{} tras error: {}", label, attempt, retries, error);
            }
            result => return result,
        }
    }
}

/// `?a=1&b=x%20y`; vacío si no hay parámetros
pub fn query_string(params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect();
    format!("?{}", pairs.join("&"))
}

/// Sub-ruta de una acción sobre un registro: `/{id}/{action}`
pub fn action_path(id: i64, action: &str) -> String {
    format!("/{}/{}", id, action)
}

/// Cuerpo de las acciones que no llevan datos
pub fn empty_body() -> serde_json::Value {
    serde_json::json!({})
}

pub struct RestResource<R: ResourceDef> {
    _marker: PhantomData<fn() -> R>,
}

impl<R: ResourceDef> Clone for RestResource<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ResourceDef> Copy for RestResource<R> {}

impl<R: ResourceDef> Default for RestResource<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ResourceDef> RestResource<R> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    fn url(&self, path: &str) -> String {
        api_url(&R::BASE.url(), &format!("{}{}", R::PATH, path))
    }

    fn fail(&self, verb: Verb, url: &str, error: ApiError) -> String {
        log::error!("{} {} falló: {}", verb.as_str(), url, error);
        error.user_message(&R::MESSAGES)
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let url = self.url(path);
        let target = url.as_str();
        with_retries(R::RETRIES, target, move || async move {
            let text = send(Verb::Get, target, None).await?;
            decode::<T>(&text)
        })
        .await
        .map_err(|e| self.fail(Verb::Get, target, e))
    }

    async fn execute(&self, verb: Verb, path: &str, body: Option<String>) -> Result<String, String> {
        let url = self.url(path);
        send(verb, &url, body)
            .await
            .map_err(|e| self.fail(verb, &url, e))
    }

    async fn mutate<B: Serialize + ?Sized>(
        &self,
        verb: Verb,
        path: &str,
        body: &B,
    ) -> Result<String, String> {
        let json = encode(body).map_err(|e| self.fail(verb, &self.url(path), e))?;
        self.execute(verb, path, Some(json)).await
    }

    fn read<T: DeserializeOwned>(&self, verb: Verb, path: &str, text: &str) -> Result<T, String> {
        decode(text).map_err(|e| self.fail(verb, &self.url(path), e))
    }

    pub async fn find_all(&self) -> Result<Vec<R::Response>, String> {
        self.fetch("").await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<R::Response, String> {
        self.fetch(&format!("/{}", id)).await
    }

    pub async fn save(&self, request: &R::Request) -> Result<R::Response, String> {
        let text = self.mutate(Verb::Post, "", request).await?;
        self.read(Verb::Post, "", &text)
    }

    pub async fn update(&self, id: i64, request: &R::Request) -> Result<R::Response, String> {
        let path = format!("/{}", id);
        let text = self.mutate(Verb::Put, &path, request).await?;
        self.read(Verb::Put, &path, &text)
    }

    pub async fn delete(&self, id: i64) -> Result<(), String> {
        self.execute(Verb::Delete, &format!("/{}", id), None)
            .await
            .map(|_| ())
    }

    /// GET de una sub-ruta que devuelve una lista, p. ej. `/activos`
    pub async fn get_list(&self, path: &str) -> Result<Vec<R::Response>, String> {
        self.fetch(path).await
    }

    /// GET de una sub-ruta que devuelve un elemento, p. ej. `/nit/{nit}`
    pub async fn get_one(&self, path: &str) -> Result<R::Response, String> {
        self.fetch(path).await
    }

    pub async fn get_list_query(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<R::Response>, String> {
        self.fetch(&format!("{}{}", path, query_string(params))).await
    }

    /// `PUT /{id}/{action}` con cuerpo `{}`
    pub async fn put_action(&self, id: i64, action: &str) -> Result<(), String> {
        self.mutate(Verb::Put, &action_path(id, action), &empty_body())
            .await
            .map(|_| ())
    }

    pub async fn post_action<B: Serialize + ?Sized>(
        &self,
        id: i64,
        action: &str,
        body: &B,
    ) -> Result<(), String> {
        self.mutate(Verb::Post, &action_path(id, action), body)
            .await
            .map(|_| ())
    }

    pub async fn patch_action<B: Serialize + ?Sized>(
        &self,
        id: i64,
        action: &str,
        body: &B,
    ) -> Result<(), String> {
        self.mutate(Verb::Patch, &action_path(id, action), body)
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    #[test]
    fn test_query_string() {
        assert_eq!(query_string(&[]), "");
        assert_eq!(
            query_string(&[("razonSocial", "Acme & Hijos")]),
            "?razonSocial=Acme%20%26%20Hijos"
        );
        assert_eq!(query_string(&[("a", "1"), ("b", "2")]), "?a=1&b=2");
    }

    #[test]
    fn test_retries_transient_errors() {
        let calls = Cell::new(0);
        let result: Result<u32, ApiError> = block_on(with_retries(2, "test", || {
            calls.set(calls.get() + 1);
            let n = calls.get();
            async move {
                if n < 3 {
                    Err(ApiError::Network("caído".into()))
                } else {
                    Ok(n)
                }
            }
        }));
        assert_eq!(result, Ok(3));
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_retries_give_up() {
        let calls = Cell::new(0);
        let result: Result<(), ApiError> = block_on(with_retries(1, "test", || {
            calls.set(calls.get() + 1);
            async { Err(ApiError::Server { status: 500 }) }
        }));
        assert_eq!(result, Err(ApiError::Server { status: 500 }));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_no_retry_on_client_error() {
        let calls = Cell::new(0);
        let result: Result<(), ApiError> = block_on(with_retries(2, "test", || {
            calls.set(calls.get() + 1);
            async { Err(ApiError::NotFound) }
        }));
        assert_eq!(result, Err(ApiError::NotFound));
        assert_eq!(calls.get(), 1);
    }
}
