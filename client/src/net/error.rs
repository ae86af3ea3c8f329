//! Backend error normalization.
//!
//! DESIGN
//! ======
//! The backend reports failures in several shapes: `{error}`, `{message}`, a
//! flat field map, a field map nested under `error`, or plain text. They are
//! classified once here so screens match on [`ApiError`] instead of sniffing
//! response bodies.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

use serde_json::{Map, Value};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, timeout).
    #[error("network error: {0}")]
    Network(String),
    /// 401/403. The session has already been cleared when this is returned.
    #[error("{}", .message.as_deref().unwrap_or("Your session has expired. Please sign in again."))]
    Unauthorized { status: u16, message: Option<String> },
    /// 400 with per-field messages.
    #[error("{}", summarize_fields(.fields))]
    Validation { fields: BTreeMap<String, String> },
    /// Any other failure status.
    #[error("{message}")]
    General { status: u16, message: String },
    /// A success response whose body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. } | Self::General { status, .. } => Some(*status),
            Self::Validation { .. } => Some(400),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }

    /// Field messages for inline display; empty for non-validation errors.
    pub fn field_errors(&self) -> BTreeMap<String, String> {
        match self {
            Self::Validation { fields } => fields.clone(),
            _ => BTreeMap::new(),
        }
    }

    /// Message for a general banner.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

fn summarize_fields(fields: &BTreeMap<String, String>) -> String {
    if fields.is_empty() {
        return "Validation failed.".to_owned();
    }
    fields.values().cloned().collect::<Vec<_>>().join(" ")
}

/// Classify a non-success response.
pub fn normalize_error(status: u16, body: &str) -> ApiError {
    let parsed = serde_json::from_str::<Value>(body).ok();

    if status == 401 || status == 403 {
        let message = parsed.as_ref().and_then(message_of).or_else(|| plain_text(body));
        return ApiError::Unauthorized { status, message };
    }

    match parsed {
        Some(Value::Object(map)) => normalize_object(status, &map),
        Some(Value::String(s)) if !s.trim().is_empty() => ApiError::General { status, message: s },
        _ => match plain_text(body) {
            Some(message) => ApiError::General { status, message },
            None => ApiError::General { status, message: fallback_message(status) },
        },
    }
}

fn normalize_object(status: u16, map: &Map<String, Value>) -> ApiError {
    if status == 400 {
        if let Some(Value::Object(nested)) = map.get("error") {
            if let Some(fields) = field_map(nested) {
                return ApiError::Validation { fields };
            }
        }
        let is_envelope = map.keys().all(|k| k == "error" || k == "message" || k == "status" || k == "timestamp");
        if !is_envelope {
            if let Some(fields) = field_map(map) {
                return ApiError::Validation { fields };
            }
        }
    }
    let message = message_of(&Value::Object(map.clone())).unwrap_or_else(|| fallback_message(status));
    ApiError::General { status, message }
}

/// A non-empty object whose values are all strings.
fn field_map(map: &Map<String, Value>) -> Option<BTreeMap<String, String>> {
    if map.is_empty() {
        return None;
    }
    map.iter()
        .map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_owned())))
        .collect()
}

fn message_of(value: &Value) -> Option<String> {
    ["error", "message"]
        .iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .filter(|s| !s.trim().is_empty())
        .map(str::to_owned)
}

fn plain_text(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed.starts_with('<') || trimmed.starts_with('{') {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

fn fallback_message(status: u16) -> String {
    if status >= 500 {
        format!("The server ran into a problem (status {status}). Please try again later.")
    } else {
        format!("Request failed with status {status}.")
    }
}
