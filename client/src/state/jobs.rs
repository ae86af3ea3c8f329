//! Job portal screen state.
//!
//! DESIGN
//! ======
//! Raw lists (`jobs`, `applications`, `my_applications`) are the source of
//! truth; the filtered views are derived on demand from the current queries.
//! Only one panel is open at a time, mirrored by [`JobPanel`].

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use super::forms::{FormErrors, require};
use super::optimistic::Snapshot;
use crate::net::error::ApiError;
use crate::net::types::{Application, ApplicationRequest, ApplicationStatus, Job, JobPostRequest};

pub const SALARY_RANGES: &[&str] = &[
    "4-6 Lakhs INR",
    "6-9 Lakhs INR",
    "9-12 Lakhs INR",
    "12-15 Lakhs INR",
    "15-20 Lakhs INR",
    "20+ Lakhs INR",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JobPanel {
    #[default]
    Jobs,
    PostJob,
    AllApplications,
    MyApplications,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplyForm {
    pub job_id: i64,
    pub job_title: String,
    pub resume_link: String,
    pub skills: String,
    /// Raw input.
    pub years_of_experience: String,
}

impl ApplyForm {
    pub fn for_job(job: &Job) -> Self {
        Self { job_id: job.id, job_title: job.title.clone(), ..Self::default() }
    }

    pub fn validate(&self) -> FormErrors {
        let mut errors = require(&[("resumeLink", "Resume link", &self.resume_link), ("skills", "Skills", &self.skills)]);
        if self.years_of_experience.trim().parse::<u32>().is_err() {
            errors.set_field("yearsOfExperience", "Years of experience must be a whole number.");
        }
        errors
    }

    pub fn to_request(&self) -> ApplicationRequest {
        ApplicationRequest {
            job_id: self.job_id,
            resume_link: self.resume_link.trim().to_owned(),
            skills: self.skills.trim().to_owned(),
            years_of_experience: self.years_of_experience.trim().parse().unwrap_or(0),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct JobPortalState {
    pub jobs: Vec<Job>,
    pub job_query: String,
    pub applications: Vec<Application>,
    pub application_query: String,
    pub my_applications: Vec<Application>,
    pub panel: JobPanel,
    pub new_job: JobPostRequest,
    pub job_errors: FormErrors,
    pub apply: Option<ApplyForm>,
    pub apply_errors: FormErrors,
}

impl JobPortalState {
    /// Jobs matching the search over title, location, description and skills.
    pub fn filtered_jobs(&self) -> Vec<Job> {
        let query = self.job_query.trim().to_lowercase();
        if query.is_empty() {
            return self.jobs.clone();
        }
        self.jobs
            .iter()
            .filter(|job| {
                [&job.title, &job.location, &job.description, &job.skills_required]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&query))
            })
            .cloned()
            .collect()
    }

    /// Applications matching the search over applicant name, job title and skills.
    pub fn filtered_applications(&self) -> Vec<Application> {
        let query = self.application_query.trim().to_lowercase();
        if query.is_empty() {
            return self.applications.clone();
        }
        self.applications
            .iter()
            .filter(|app| {
                let employee = app.employee.as_ref();
                let first = employee.map(|e| e.first_name.to_lowercase()).unwrap_or_default();
                let last = employee.map(|e| e.last_name.to_lowercase()).unwrap_or_default();
                let title = app.job.as_ref().map(|j| j.title.to_lowercase()).unwrap_or_default();
                first.contains(&query)
                    || last.contains(&query)
                    || title.contains(&query)
                    || app.skills.to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }

    /// Whether `employee_id` already applied to `job_id`.
    pub fn has_applied(&self, job_id: i64, employee_id: Option<i64>) -> bool {
        let Some(employee_id) = employee_id else { return false };
        self.my_applications.iter().any(|app| {
            app.job.as_ref().is_some_and(|j| j.id == job_id)
                && app.employee.as_ref().and_then(|e| e.employee_id) == Some(employee_id)
        })
    }

    /// Toggle `panel`; closing an open panel returns to the job list.
    pub fn toggle_panel(&mut self, panel: JobPanel) {
        self.panel = if self.panel == panel { JobPanel::Jobs } else { panel };
        if panel == JobPanel::PostJob {
            self.new_job = JobPostRequest::default();
            self.job_errors = FormErrors::default();
        }
    }

    /// Record a failed job post. Field messages land on their fields; the job
    /// list is untouched.
    pub fn job_post_failed(&mut self, err: &ApiError) {
        self.job_errors = FormErrors::from_api(err);
        if !self.job_errors.fields.is_empty() {
            self.job_errors.general = Some("Failed to post job. Please check the form for errors below.".to_owned());
        } else if let Some(general) = self.job_errors.general.take() {
            self.job_errors.general = Some(format!("Error posting job: {general}"));
        }
    }

    pub fn job_posted(&mut self) {
        self.new_job = JobPostRequest::default();
        self.job_errors = FormErrors::default();
        self.panel = JobPanel::Jobs;
    }

    pub fn open_apply(&mut self, job: &Job) {
        self.apply = Some(ApplyForm::for_job(job));
        self.apply_errors = FormErrors::default();
    }

    pub fn close_apply(&mut self) {
        self.apply = None;
        self.apply_errors = FormErrors::default();
    }

    pub fn apply_failed(&mut self, err: &ApiError) {
        self.apply_errors = FormErrors::from_api(err);
        if !self.apply_errors.fields.is_empty() {
            self.apply_errors.general =
                Some("Error submitting application. Please check the form for errors below.".to_owned());
        }
    }

    pub fn remove_job(&mut self, id: i64) {
        self.jobs.retain(|job| job.id != id);
    }

    /// Optimistically set an application's status. Returns `None` when the
    /// application is not in the local list.
    pub fn begin_status_change(&mut self, id: i64, status: ApplicationStatus) -> Option<Snapshot<Application, i64>> {
        Snapshot::apply(&mut self.applications, id, |app: &Application| app.id, |app| app.status = status)
    }
}

/// Banner text for a failed job delete.
pub fn delete_job_message(err: &ApiError) -> String {
    if err.is_not_found() {
        "Job not found or already deleted.".to_owned()
    } else if err.is_forbidden() {
        "You are not authorized to delete this job.".to_owned()
    } else {
        format!("Failed to delete job. Server error: {}", err.message())
    }
}
