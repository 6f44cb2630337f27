//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

const PRIVATE_INFIX: &str = "/v1/private";

/// Base URL elegida por recurso
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiBase {
    /// `.../api/v1/private`
    Private,
    /// La misma base sin el infijo `/v1/private`
    Public,
}

impl ApiBase {
    pub fn url(&self) -> String {
        match self {
            Self::Private => api_base(),
            Self::Public => public_api_base(),
        }
    }
}

/// Get the base URL for API requests
///
/// Uses `ERP_API_URL` when it was set at compile time, otherwise builds the
/// URL from the current window location with port 8080.
///
/// # Returns
/// - API base URL like "http://localhost:8080/api/v1/private"
/// - Empty string if window is not available
///
/// # Example
/// ```rust,no_run
/// # use erp_frontend::shared::api_utils::{api_base, api_url};
/// let url = api_url(&api_base(), "/empresa");
/// ```
pub fn api_base() -> String {
    if let Some(url) = option_env!("ERP_API_URL") {
        return url.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:8080/api{}", protocol, hostname, PRIVATE_INFIX)
}

/// Base for the company sub-resources served outside `/v1/private`
pub fn public_api_base() -> String {
    strip_private(&api_base())
}

pub fn strip_private(base: &str) -> String {
    base.replacen(PRIVATE_INFIX, "", 1)
}

/// Build a full API URL from a base and a path
///
/// # Arguments
/// * `base` - Result of [`api_base`] or [`public_api_base`]
/// * `path` - Resource path, e.g. "/empresa/123"
pub fn api_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_string();
    }
    if path.starts_with('/') || path.starts_with('?') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_private() {
        assert_eq!(
            strip_private("http://localhost:8080/api/v1/private"),
            "http://localhost:8080/api"
        );
        assert_eq!(strip_private("http://h:8080/api"), "http://h:8080/api");
    }

    #[test]
    fn test_api_url() {
        let base = "http://localhost:8080/api/v1/private";
        assert_eq!(
            api_url(base, "/empresa/7"),
            "http://localhost:8080/api/v1/private/empresa/7"
        );
        assert_eq!(
            api_url(base, "ventas/clientes"),
            "http://localhost:8080/api/v1/private/ventas/clientes"
        );
        assert_eq!(api_url(base, ""), base);
    }
}
