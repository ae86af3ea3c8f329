//! Dashboard state: profile and the signed-in user's own uploads.
//!
//! DESIGN
//! ======
//! Upload deletion is not optimistic. The row is removed only after the
//! backend confirms; a failure leaves the list as it was and produces a
//! banner message.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use super::forms::{FormErrors, require};
use crate::net::error::ApiError;
use crate::net::types::{Upload, UploadRequest, UserProfile};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadForm {
    pub title: String,
    pub description: String,
    pub project_duration: String,
    pub file_url: String,
    pub started_date: String,
    pub end_date: String,
}

impl UploadForm {
    pub fn validate(&self) -> FormErrors {
        let mut errors = require(&[
            ("title", "Title", &self.title),
            ("description", "Description", &self.description),
            ("projectDuration", "Project duration", &self.project_duration),
            ("fileUrl", "File URL", &self.file_url),
            ("startedDate", "Start date", &self.started_date),
            ("endDate", "End date", &self.end_date),
        ]);
        let (start, end) = (self.started_date.trim(), self.end_date.trim());
        if !start.is_empty() && !end.is_empty() && end < start {
            errors.set_field("endDate", "End date cannot be before the start date.");
        }
        errors
    }

    pub fn to_request(&self, employee_id: i64) -> UploadRequest {
        UploadRequest {
            title: self.title.trim().to_owned(),
            description: self.description.trim().to_owned(),
            project_duration: self.project_duration.trim().to_owned(),
            file_url: self.file_url.trim().to_owned(),
            started_date: self.started_date.trim().to_owned(),
            end_date: self.end_date.trim().to_owned(),
            external_employee_id: employee_id,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub profile: Option<UserProfile>,
    /// Working copy while the profile editor is open.
    pub profile_draft: Option<UserProfile>,
    pub profile_errors: FormErrors,
    pub uploads: Vec<Upload>,
    pub upload_form: UploadForm,
    pub upload_errors: FormErrors,
}

impl DashboardState {
    pub fn start_edit_profile(&mut self) {
        self.profile_draft.clone_from(&self.profile);
        self.profile_errors = FormErrors::default();
    }

    pub fn cancel_edit_profile(&mut self) {
        self.profile_draft = None;
        self.profile_errors = FormErrors::default();
    }

    pub fn profile_saved(&mut self, profile: UserProfile) {
        self.profile = Some(profile);
        self.profile_draft = None;
        self.profile_errors = FormErrors::default();
    }

    pub fn upload_created(&mut self, upload: Upload) {
        self.uploads.insert(0, upload);
        self.upload_form = UploadForm::default();
        self.upload_errors = FormErrors::default();
    }

    pub fn upload_deleted(&mut self, id: &str) {
        self.uploads.retain(|u| u.id != id);
    }
}

/// Banner text for a failed upload delete.
pub fn delete_upload_message(err: &ApiError) -> String {
    if err.is_not_found() {
        "Upload not found or already deleted.".to_owned()
    } else {
        format!("Failed to delete upload: {}", err.message())
    }
}
