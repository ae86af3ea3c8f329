//! Wire DTOs for the portal backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Optional or
//! inconsistently populated fields use `#[serde(default)]` so a sparse
//! response still decodes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::session::Session;

// =============================================================
// Auth
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    #[serde(default)]
    pub jwt_token: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub employee_id: Option<i64>,
}

impl SignInResponse {
    pub fn into_session(self) -> Session {
        Session {
            token: self.jwt_token.filter(|t| !t.is_empty()),
            email: self.email.filter(|e| !e.is_empty()),
            roles: Some(self.roles),
            employee_id: self.employee_id,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub employee_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub contact_information: String,
    pub department: String,
    pub job_title: String,
    pub personal_email: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    pub personal_email: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub organization_email: String,
    pub token: String,
    pub new_password: String,
}

/// Generic `{message}` success body. Registration also echoes identity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "id_as_string")]
    pub employee_id: Option<String>,
}

/// HR record used to prefill sign-up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetails {
    pub employee_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

// =============================================================
// Users
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub employee_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub contact_information: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
}

// =============================================================
// Jobs and applications
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostRequest {
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary: String,
    pub job_type: String,
    pub experience_level: String,
    pub skills_required: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub experience_level: String,
    #[serde(default)]
    pub skills_required: String,
    #[serde(default)]
    pub posted_date: Option<String>,
    #[serde(default)]
    pub manager_id: Option<i64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
}

impl ApplicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Accepted => "ACCEPTED",
            Self::Declined => "DECLINED",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRequest {
    pub job_id: i64,
    pub resume_link: String,
    pub skills: String,
    pub years_of_experience: u32,
}

/// Applicant summary embedded in an [`Application`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationEmployee {
    #[serde(default)]
    pub employee_id: Option<i64>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: i64,
    #[serde(default)]
    pub job: Option<Job>,
    #[serde(default)]
    pub employee: Option<ApplicationEmployee>,
    #[serde(default)]
    pub resume_link: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub years_of_experience: u32,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub applied_date: Option<String>,
}

// =============================================================
// FAQ
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub title: String,
    pub content: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub content: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub content: String,
    #[serde(default)]
    pub user_external_id: Option<i64>,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_role: String,
    #[serde(default)]
    pub user_profile_picture_url: Option<String>,
    #[serde(default)]
    pub posted_at: Option<String>,
    #[serde(default)]
    pub last_updated_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub user_external_id: Option<i64>,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_role: String,
    #[serde(default)]
    pub user_profile_picture_url: Option<String>,
    #[serde(default)]
    pub posted_at: Option<String>,
    #[serde(default)]
    pub last_updated_at: Option<String>,
    #[serde(default)]
    pub answers: Vec<Answer>,
}

// =============================================================
// Uploads, exhibition, leaderboard
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub title: String,
    pub description: String,
    pub project_duration: String,
    pub file_url: String,
    /// `YYYY-MM-DD`.
    pub started_date: String,
    /// `YYYY-MM-DD`.
    pub end_date: String,
    pub external_employee_id: i64,
}

/// A piece of work as returned by the uploads and exhibition endpoints.
///
/// The uploads API names the id `id`; the exhibition API calls it `uploadId`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Upload {
    #[serde(alias = "uploadId")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub uploader_first_name: Option<String>,
    #[serde(default)]
    pub uploader_last_name: Option<String>,
    #[serde(default)]
    pub upload_date: Option<String>,
    #[serde(default)]
    pub file_url: String,
    #[serde(default)]
    pub project_duration: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub started_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub external_employee_id: Option<i64>,
}

pub type ExhibitionItem = Upload;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingRequest {
    pub rating: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRequest {
    pub comment: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub employee_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub average_rating: f64,
}

impl LeaderboardEntry {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }
}

/// Accepts an id sent either as a JSON number or a string.
fn id_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
