//! Portal REST endpoints.
//!
//! Each method is a thin typed wrapper over [`ApiClient::send_json`] or
//! [`ApiClient::send_empty`]; authentication and error normalization happen
//! there. Path builders are free functions so tests can check them directly.
//!
//! ERROR HANDLING
//! ==============
//! Every method returns `Result<_, ApiError>`. Screens decide how to present
//! the failure; nothing here retries.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::http::{ApiClient, HttpRequest, Transport};
use super::types::{
    Answer, AnswerRequest, Application, ApplicationRequest, ApplicationStatus, CommentRequest, EmployeeDetails,
    ExhibitionItem, ForgotPasswordRequest, Job, JobPostRequest, LeaderboardEntry, MessageResponse, Question,
    QuestionRequest, RatingRequest, ResetPasswordRequest, SignInRequest, SignInResponse, SignUpRequest, Upload,
    UploadRequest, UserProfile,
};
use crate::state::session::Session;

fn employee_endpoint(id: i64) -> String {
    format!("/api/employees/{id}")
}

fn job_endpoint(id: i64) -> String {
    format!("/api/jobs/{id}")
}

fn application_status_endpoint(id: i64) -> String {
    format!("/api/applications/{id}/status")
}

fn question_endpoint(id: i64) -> String {
    format!("/api/faq/questions/{id}")
}

fn answer_endpoint(id: i64) -> String {
    format!("/api/faq/answers/{id}")
}

fn upload_endpoint(id: &str) -> String {
    format!("/api/uploads/{id}")
}

/// Exhibition filter; exactly one criterion is sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExhibitionFilter {
    EmployeeId(i64),
    FirstName(String),
}

impl<T: Transport> ApiClient<T> {
    // =============================================================
    // Auth
    // =============================================================

    /// Sign in and record the session.
    ///
    /// # Errors
    ///
    /// Returns the backend error, or [`ApiError::Decode`] when the response
    /// lacks a token, email or employee id, or the session cannot be stored.
    /// In every case the client ends signed out.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let body = SignInRequest { email: email.to_owned(), password: password.to_owned() };
        let response: SignInResponse = self.send_json(HttpRequest::post("/api/auth/login").json(&body)?).await?;
        let session = response.into_session();
        if self.session().sign_in(&session) {
            Ok(session)
        } else {
            Err(ApiError::Decode("Sign in failed: incomplete response from server.".to_owned()))
        }
    }

    /// # Errors
    ///
    /// Backend validation failures arrive as [`ApiError::Validation`].
    pub async fn register(&self, request: &SignUpRequest) -> Result<MessageResponse, ApiError> {
        self.send_json(HttpRequest::post("/api/auth/register").json(request)?).await
    }

    /// # Errors
    ///
    /// Returns the normalized backend error.
    pub async fn forgot_password(&self, personal_email: &str) -> Result<MessageResponse, ApiError> {
        let body = ForgotPasswordRequest { personal_email: personal_email.to_owned() };
        self.send_json(HttpRequest::post("/api/auth/forgot-password").json(&body)?).await
    }

    /// # Errors
    ///
    /// Returns the normalized backend error.
    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<MessageResponse, ApiError> {
        self.send_json(HttpRequest::post("/api/auth/reset-password").json(request)?).await
    }

    /// HR record used to prefill sign-up.
    ///
    /// # Errors
    ///
    /// A 404 means no such employee.
    pub async fn employee_details(&self, id: i64) -> Result<EmployeeDetails, ApiError> {
        self.send_json(HttpRequest::get(employee_endpoint(id))).await
    }

    // =============================================================
    // Users
    // =============================================================

    /// # Errors
    ///
    /// Returns the normalized backend error.
    pub async fn current_profile(&self) -> Result<UserProfile, ApiError> {
        self.send_json(HttpRequest::get("/api/users/me")).await
    }

    /// # Errors
    ///
    /// Returns the normalized backend error.
    pub async fn update_profile(&self, profile: &UserProfile) -> Result<UserProfile, ApiError> {
        self.send_json(HttpRequest::put("/api/users/me").json(profile)?).await
    }

    // =============================================================
    // Jobs and applications
    // =============================================================

    /// # Errors
    ///
    /// Returns the normalized backend error.
    pub async fn jobs(&self) -> Result<Vec<Job>, ApiError> {
        self.send_json(HttpRequest::get("/api/jobs")).await
    }

    /// # Errors
    ///
    /// A 400 with per-field messages arrives as [`ApiError::Validation`].
    pub async fn post_job(&self, request: &JobPostRequest) -> Result<Job, ApiError> {
        self.send_json(HttpRequest::post("/api/jobs").json(request)?).await
    }

    /// # Errors
    ///
    /// Returns the normalized backend error.
    pub async fn delete_job(&self, id: i64) -> Result<(), ApiError> {
        self.send_empty(HttpRequest::delete(job_endpoint(id))).await
    }

    /// # Errors
    ///
    /// A 400 with per-field messages arrives as [`ApiError::Validation`].
    pub async fn apply(&self, request: &ApplicationRequest) -> Result<Application, ApiError> {
        self.send_json(HttpRequest::post("/api/applications").json(request)?).await
    }

    /// All applications (manager view).
    ///
    /// # Errors
    ///
    /// Returns the normalized backend error.
    pub async fn all_applications(&self) -> Result<Vec<Application>, ApiError> {
        self.send_json(HttpRequest::get("/api/applications")).await
    }

    /// # Errors
    ///
    /// Returns the normalized backend error.
    pub async fn applications_for_employee(&self, employee_id: i64) -> Result<Vec<Application>, ApiError> {
        self.send_json(HttpRequest::get(format!("/api/applications/employee/{employee_id}"))).await
    }

    /// # Errors
    ///
    /// Returns the normalized backend error.
    pub async fn applications_for_job(&self, job_id: i64) -> Result<Vec<Application>, ApiError> {
        self.send_json(HttpRequest::get(format!("/api/applications/job/{job_id}"))).await
    }

    /// # Errors
    ///
    /// Returns the normalized backend error.
    pub async fn set_application_status(&self, id: i64, status: ApplicationStatus) -> Result<(), ApiError> {
        self.send_empty(HttpRequest::put(application_status_endpoint(id)).query("status", status.as_str())).await
    }

    // =============================================================
    // FAQ
    // =============================================================

    /// # Errors
    ///
    /// Returns the normalized backend error.
    pub async fn questions(&self) -> Result<Vec<Question>, ApiError> {
        self.send_json(HttpRequest::get("/api/faq/questions")).await
    }

    /// # Errors
    ///
    /// Returns the normalized backend error.
    pub async fn question(&self, id: i64) -> Result<Question, ApiError> {
        self.send_json(HttpRequest::get(question_endpoint(id))).await
    }

    /// # Errors
    ///
    /// Returns the normalized backend error.
    pub async fn post_question(&self, request: &QuestionRequest) -> Result<Question, ApiError> {
        self.send_json(HttpRequest::post("/api/faq/questions").json(request)?).await
    }

    /// # Errors
    ///
    /// Returns the normalized backend error.
    pub async fn update_question(&self, id: i64, request: &QuestionRequest) -> Result<Question, ApiError> {
        self.send_json(HttpRequest::put(question_endpoint(id)).json(request)?).await
    }

    /// # Errors
    ///
    /// Returns the normalized backend error.
    pub async fn delete_question(&self, id: i64) -> Result<(), ApiError> {
        self.send_empty(HttpRequest::delete(question_endpoint(id))).await
    }

    /// # Errors
    ///
    /// Returns the normalized backend error.
    pub async fn post_answer(&self, question_id: i64, content: &str) -> Result<Answer, ApiError> {
        let body = AnswerRequest { content: content.to_owned() };
        self.send_json(HttpRequest::post(format!("{}/answers", question_endpoint(question_id))).json(&body)?).await
    }

    /// # Errors
    ///
    /// Returns the normalized backend error.
    pub async fn update_answer(&self, id: i64, content: &str) -> Result<Answer, ApiError> {
        let body = AnswerRequest { content: content.to_owned() };
        self.send_json(HttpRequest::put(answer_endpoint(id)).json(&body)?).await
    }

    /// # Errors
    ///
    /// Returns the normalized backend error.
    pub async fn delete_answer(&self, id: i64) -> Result<(), ApiError> {
        self.send_empty(HttpRequest::delete(answer_endpoint(id))).await
    }

    // =============================================================
    // Uploads and exhibition
    // =============================================================

    /// # Errors
    ///
    /// Returns the normalized backend error.
    pub async fn create_upload(&self, request: &UploadRequest) -> Result<Upload, ApiError> {
        self.send_json(HttpRequest::post("/api/uploads").json(request)?).await
    }

    /// # Errors
    ///
    /// Returns the normalized backend error.
    pub async fn my_uploads(&self) -> Result<Vec<Upload>, ApiError> {
        self.send_json(HttpRequest::get("/api/uploads/my-uploads")).await
    }

    /// # Errors
    ///
    /// A 404 means the upload does not exist.
    pub async fn upload(&self, id: &str) -> Result<Upload, ApiError> {
        self.send_json(HttpRequest::get(upload_endpoint(id))).await
    }

    /// # Errors
    ///
    /// A 404 means the upload was already deleted.
    pub async fn delete_upload(&self, id: &str) -> Result<(), ApiError> {
        self.send_empty(HttpRequest::delete(upload_endpoint(id))).await
    }

    /// # Errors
    ///
    /// Returns the normalized backend error.
    pub async fn rate_upload(&self, id: &str, rating: u8) -> Result<(), ApiError> {
        let body = RatingRequest { rating };
        self.send_empty(HttpRequest::patch(format!("{}/rate", upload_endpoint(id))).json(&body)?).await
    }

    /// # Errors
    ///
    /// Returns the normalized backend error.
    pub async fn comment_upload(&self, id: &str, comment: &str) -> Result<(), ApiError> {
        let body = CommentRequest { comment: comment.to_owned() };
        self.send_empty(HttpRequest::patch(format!("{}/comment", upload_endpoint(id))).json(&body)?).await
    }

    /// # Errors
    ///
    /// Returns the normalized backend error.
    pub async fn exhibition(&self) -> Result<Vec<ExhibitionItem>, ApiError> {
        self.send_json(HttpRequest::get("/api/exhibition")).await
    }

    /// # Errors
    ///
    /// Returns the normalized backend error.
    pub async fn filtered_exhibition(&self, filter: &ExhibitionFilter) -> Result<Vec<ExhibitionItem>, ApiError> {
        let request = HttpRequest::get("/api/exhibition/filtered-projects");
        let request = match filter {
            ExhibitionFilter::EmployeeId(id) => request.query("externalEmployeeId", id.to_string()),
            ExhibitionFilter::FirstName(name) => request.query("firstName", name.clone()),
        };
        self.send_json(request).await
    }

    // =============================================================
    // Leaderboard
    // =============================================================

    /// Entries in the order the backend ranks them.
    ///
    /// # Errors
    ///
    /// Returns the normalized backend error.
    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError> {
        self.send_json(HttpRequest::get("/api/leaderboard/average-ratings")).await
    }
}
