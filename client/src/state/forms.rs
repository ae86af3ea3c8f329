//! Form-level error bookkeeping shared by every screen.
//!
//! Client-side checks stop at required-field presence; anything richer comes
//! back from the backend as an [`ApiError::Validation`] field map and is shown
//! verbatim.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::collections::BTreeMap;

use crate::net::error::ApiError;

/// Per-field messages plus one general message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub fields: BTreeMap<String, String>,
    pub general: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.general.is_none()
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn set_field(&mut self, name: &str, message: impl Into<String>) {
        self.fields.insert(name.to_owned(), message.into());
    }

    pub fn general(message: impl Into<String>) -> Self {
        Self { fields: BTreeMap::new(), general: Some(message.into()) }
    }

    /// Map a backend failure onto the form. Validation errors land on their
    /// fields; everything else becomes the general message.
    pub fn from_api(err: &ApiError) -> Self {
        match err {
            ApiError::Validation { fields } => Self { fields: fields.clone(), general: None },
            other => Self::general(other.message()),
        }
    }
}

/// Required-field check: one "`label` is required." message per blank field.
///
/// `fields` holds `(name, label, value)` triples.
pub fn require(fields: &[(&str, &str, &str)]) -> FormErrors {
    let mut errors = FormErrors::default();
    for (name, label, value) in fields {
        if value.trim().is_empty() {
            errors.set_field(name, format!("{label} is required."));
        }
    }
    errors
}
