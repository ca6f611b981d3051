//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result` instead of panicking so session and catalog
//! fetch failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::types::{CatalogItem, UserIdentity};

/// Failure talking to a backend endpoint.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Source of the signed-in user record.
///
/// The session store depends on this seam rather than on `gloo-net` so the
/// bootstrap can be driven by scripted services in tests.
pub trait AuthService {
    /// Fetch the current principal. Any transport, status, or decode problem
    /// is an error; there is no partial success.
    fn fetch_current_user(&self) -> impl Future<Output = Result<UserIdentity, ApiError>>;
}

/// Auth backend reached over HTTP at [`crate::consts::AUTH_ME_ENDPOINT`].
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthService;

impl AuthService for HttpAuthService {
    async fn fetch_current_user(&self) -> Result<UserIdentity, ApiError> {
        fetch_current_user().await
    }
}

/// Validate a decoded `/api/auth/me` body.
#[cfg(any(test, feature = "hydrate"))]
fn decode_user(value: serde_json::Value) -> Result<UserIdentity, ApiError> {
    UserIdentity::from_value(value).ok_or_else(|| ApiError::Decode("expected a user object".to_owned()))
}

#[cfg(any(test, feature = "hydrate"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16) -> ApiError {
    ApiError::Status(status)
}

/// Fetch the currently authenticated user from `/api/auth/me`.
///
/// # Errors
///
/// Returns an error when the request fails, the server rejects the session
/// (non-2xx), or the body is not a user object.
pub async fn fetch_current_user() -> Result<UserIdentity, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(crate::consts::AUTH_ME_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !is_success(resp.status()) {
            return Err(status_error(resp.status()));
        }
        let body = resp
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        decode_user(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the current catalog page from `/api/anime`.
///
/// Null entries are preserved; the grid filters them at render time.
///
/// # Errors
///
/// Returns an error when the request fails, the status is non-2xx, or the
/// body does not decode as a list of catalog items.
pub async fn fetch_catalog() -> Result<Vec<Option<CatalogItem>>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(crate::consts::CATALOG_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !is_success(resp.status()) {
            return Err(status_error(resp.status()));
        }
        resp.json::<Vec<Option<CatalogItem>>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
