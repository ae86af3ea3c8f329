//! Client runtime configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host renders a `<meta name="portal-api-base">` tag into the shell so a
//! single WASM build can talk to whichever backend origin the deployment uses.
//! Builds without the tag fall back to the compile-time `PORTAL_API_BASE` and
//! finally to the local development backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Backend origin used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:8089";

/// Name of the shell meta tag carrying the backend origin.
pub const API_BASE_META: &str = "portal-api-base";

/// How long success/error banners stay visible.
pub const BANNER_TIMEOUT: Duration = Duration::from_secs(10);

/// Upper bound on a single backend request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolved client configuration, provided to the app via context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub banner_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_api_base(option_env!("PORTAL_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }
}

impl ClientConfig {
    /// Build a config pointing at `api_base` with default timeouts.
    pub fn with_api_base(api_base: &str) -> Self {
        Self {
            api_base: normalize_api_base(api_base),
            banner_timeout: BANNER_TIMEOUT,
            request_timeout: REQUEST_TIMEOUT,
        }
    }

    /// Detect configuration from the rendered shell, falling back to defaults.
    pub fn detect() -> Self {
        match read_meta_api_base() {
            Some(base) => Self::with_api_base(&base),
            None => Self::default(),
        }
    }

    /// Absolute URL for an API path such as `/api/jobs`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.api_base)
        } else {
            format!("{}/{path}", self.api_base)
        }
    }
}

fn normalize_api_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE.to_owned() } else { trimmed.to_owned() }
}

fn read_meta_api_base() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let doc = web_sys::window()?.document()?;
        let el = doc
            .query_selector(&format!("meta[name=\"{API_BASE_META}\"]"))
            .ok()
            .flatten()?;
        let meta = el.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
        let content = meta.content();
        if content.trim().is_empty() { None } else { Some(content) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
