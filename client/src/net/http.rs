//! HTTP boundary with request authentication.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every backend call goes through [`ApiClient::send`]:
//! 1. attach `Authorization: Bearer <token>` when a token is stored,
//! 2. hand the request to the [`Transport`],
//! 3. on 401/403 log out and redirect to sign-in, then return the error,
//! 4. classify any other failure with [`normalize_error`].
//!
//! The logout in step 3 completes before the caller sees the error, so a
//! screen's own error handler never observes a stale session.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{ApiError, normalize_error};
use crate::config::ClientConfig;
use crate::state::session::SessionContext;

/// Route of the sign-in screen.
pub const SIGN_IN_PATH: &str = "/signin_signup";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Transport-agnostic request description. `path` is relative to the API base.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), headers: Vec::new(), body: None }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    #[must_use]
    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_owned(), value.into()));
        self
    }

    #[must_use]
    pub fn header(mut self, key: &str, value: impl Into<String>) -> Self {
        self.headers.push((key.to_owned(), value.into()));
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if `body` cannot be serialized.
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?);
        Ok(self)
    }

    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a fully prepared request to `base` and returns the raw response.
///
/// Implementations only report transport failures as `Err`; every HTTP status
/// comes back as `Ok`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, base: &str, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Browser `fetch` via `gloo-net`, bounded by the configured timeout.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport {
    pub timeout: std::time::Duration,
}

impl BrowserTransport {
    pub fn new(timeout: std::time::Duration) -> Self {
        Self { timeout }
    }
}

impl Transport for BrowserTransport {
    async fn send(&self, base: &str, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use futures::future::{Either, select};
            use gloo_net::http::RequestBuilder;

            let url = format!("{base}{}", request.path);
            let method = match request.method {
                Method::Get => gloo_net::http::Method::GET,
                Method::Post => gloo_net::http::Method::POST,
                Method::Put => gloo_net::http::Method::PUT,
                Method::Patch => gloo_net::http::Method::PATCH,
                Method::Delete => gloo_net::http::Method::DELETE,
            };
            let mut builder = RequestBuilder::new(&url).method(method);
            if !request.query.is_empty() {
                builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            }
            for (k, v) in &request.headers {
                builder = builder.header(k, v);
            }
            let prepared = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let timeout_ms = u32::try_from(self.timeout.as_millis()).unwrap_or(u32::MAX);
            let fetch = Box::pin(prepared.send());
            let timer = Box::pin(gloo_timers::future::TimeoutFuture::new(timeout_ms));
            let resp = match select(fetch, timer).await {
                Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string()))?,
                Either::Right(((), _)) => {
                    return Err(ApiError::Network(format!("request timed out after {}s", self.timeout.as_secs())));
                }
            };
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (base, request, self.timeout);
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }
}

/// Callback used to move the user to another route.
pub type Redirector = Arc<dyn Fn(&str) + Send + Sync>;

/// Authenticated backend client shared through Leptos context.
#[derive(Clone)]
pub struct ApiClient<T = BrowserTransport> {
    config: ClientConfig,
    session: SessionContext,
    transport: T,
    redirect: Redirector,
}

impl<T> std::fmt::Debug for ApiClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("api_base", &self.config.api_base).finish_non_exhaustive()
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ClientConfig, session: SessionContext, transport: T, redirect: Redirector) -> Self {
        Self { config, session, transport, redirect }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send `request`, applying authentication and error normalization.
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] for transport failures and for any
    /// non-2xx status.
    pub async fn send(&self, mut request: HttpRequest) -> Result<HttpResponse, ApiError> {
        if let Some(token) = self.session.token() {
            request.headers.retain(|(k, _)| !k.eq_ignore_ascii_case("authorization"));
            request.headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        let method = request.method;
        let path = request.path.clone();

        let response = self.transport.send(&self.config.api_base, request).await.inspect_err(|e| {
            log::warn!("{method:?} {path}: {e}");
        })?;
        if response.is_success() {
            return Ok(response);
        }

        let err = normalize_error(response.status, &response.body);
        if matches!(err, ApiError::Unauthorized { .. }) {
            log::warn!("{method:?} {path}: status {}, signing out", response.status);
            self.session.logout();
            (self.redirect)(SIGN_IN_PATH);
        } else {
            log::debug!("{method:?} {path}: status {}", response.status);
        }
        Err(err)
    }

    /// Send and decode a JSON success body.
    ///
    /// # Errors
    ///
    /// As [`ApiClient::send`], plus [`ApiError::Decode`] on schema mismatch.
    pub async fn send_json<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, ApiError> {
        let response = self.send(request).await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send and ignore any success body.
    ///
    /// # Errors
    ///
    /// As [`ApiClient::send`].
    pub async fn send_empty(&self, request: HttpRequest) -> Result<(), ApiError> {
        self.send(request).await.map(|_| ())
    }
}
