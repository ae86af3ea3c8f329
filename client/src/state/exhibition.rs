//! Exhibition gallery and detail state.

#[cfg(test)]
#[path = "exhibition_test.rs"]
mod exhibition_test;

use crate::net::api::ExhibitionFilter;
use crate::net::types::ExhibitionItem;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterKind {
    #[default]
    None,
    EmployeeId,
    FirstName,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExhibitionQuery {
    pub kind: FilterKind,
    pub value: String,
}

impl ExhibitionQuery {
    /// Backend filter for this query; `Ok(None)` means list everything.
    ///
    /// # Errors
    ///
    /// Returns the message to show when an employee id filter is not numeric.
    pub fn to_filter(&self) -> Result<Option<ExhibitionFilter>, String> {
        let value = self.value.trim();
        if value.is_empty() {
            return Ok(None);
        }
        match self.kind {
            FilterKind::None => Ok(None),
            FilterKind::EmployeeId => value
                .parse::<i64>()
                .map(|id| Some(ExhibitionFilter::EmployeeId(id)))
                .map_err(|_| "Please enter a valid Employee ID (numbers only).".to_owned()),
            FilterKind::FirstName => Ok(Some(ExhibitionFilter::FirstName(value.to_owned()))),
        }
    }
}

/// "First Last (ID: n)" for gallery cards.
pub fn uploader_name(item: &ExhibitionItem) -> String {
    let first = item.uploader_first_name.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let last = item.uploader_last_name.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let name = match (first, last) {
        (Some(f), Some(l)) => format!("{f} {l}"),
        (Some(n), None) | (None, Some(n)) => n.to_owned(),
        (None, None) => "Unknown Uploader".to_owned(),
    };
    match item.external_employee_id {
        Some(id) => format!("{name} (ID: {id})"),
        None => name,
    }
}

/// Turn a stored file reference into something the browser can open.
pub fn resolve_file_url(raw: &str, api_base: &str) -> Option<String> {
    let url = raw.trim();
    if url.is_empty() {
        return None;
    }
    if url.starts_with("http://") || url.starts_with("https://") {
        return Some(url.to_owned());
    }
    if url.starts_with("www.") {
        return Some(format!("https://{url}"));
    }
    let base = api_base.trim_end_matches('/');
    Some(match url.strip_prefix('/') {
        Some(path) => format!("{base}/{path}"),
        None => format!("{base}/{url}"),
    })
}

/// Parse a manager rating.
///
/// # Errors
///
/// Returns the message to show when the input is not an integer in 1..=5.
pub fn parse_rating(raw: &str) -> Result<u8, String> {
    match raw.trim().parse::<u8>() {
        Ok(rating) if (1..=5).contains(&rating) => Ok(rating),
        _ => Err("Please provide a valid rating between 1 and 5.".to_owned()),
    }
}

/// Validate a manager comment.
///
/// # Errors
///
/// Returns the message to show when the comment is blank.
pub fn parse_comment(raw: &str) -> Result<String, String> {
    let comment = raw.trim();
    if comment.is_empty() {
        return Err("Comment cannot be empty.".to_owned());
    }
    Ok(comment.to_owned())
}
