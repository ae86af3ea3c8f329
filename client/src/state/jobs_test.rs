use futures::executor::block_on;

use super::*;
use crate::net::mock::Fixture;
use crate::net::types::ApplicationEmployee;

fn job(id: i64, title: &str, location: &str) -> Job {
    Job { id, title: title.to_owned(), location: location.to_owned(), ..Job::default() }
}

fn application(id: i64, job_id: i64, employee_id: i64, first: &str) -> Application {
    Application {
        id,
        job: Some(job(job_id, "Engineer", "Remote")),
        employee: Some(ApplicationEmployee {
            employee_id: Some(employee_id),
            first_name: first.to_owned(),
            ..ApplicationEmployee::default()
        }),
        skills: "rust".to_owned(),
        ..Application::default()
    }
}

#[test]
fn job_search_matches_case_insensitively() {
    let state = JobPortalState {
        jobs: vec![job(1, "Rust Engineer", "Pune"), job(2, "Designer", "Remote")],
        job_query: "  REMOTE ".to_owned(),
        ..JobPortalState::default()
    };
    assert_eq!(state.filtered_jobs().iter().map(|j| j.id).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn empty_query_returns_all_applications() {
    let state = JobPortalState {
        applications: vec![application(1, 1, 7, "Ada"), application(2, 1, 8, "Bob")],
        ..JobPortalState::default()
    };
    assert_eq!(state.filtered_applications().len(), 2);
}

#[test]
fn application_search_matches_applicant_name() {
    let state = JobPortalState {
        applications: vec![application(1, 1, 7, "Ada"), application(2, 1, 8, "Bob")],
        application_query: "bob".to_owned(),
        ..JobPortalState::default()
    };
    assert_eq!(state.filtered_applications().iter().map(|a| a.id).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn has_applied_requires_matching_job_and_employee() {
    let state = JobPortalState { my_applications: vec![application(1, 3, 7, "Ada")], ..JobPortalState::default() };
    assert!(state.has_applied(3, Some(7)));
    assert!(!state.has_applied(4, Some(7)));
    assert!(!state.has_applied(3, Some(8)));
    assert!(!state.has_applied(3, None));
}

#[test]
fn posting_job_with_empty_title_shows_backend_field_message() {
    let fx = Fixture::signed_in(&["MANAGER"]);
    fx.transport.respond(400, r#"{"title":"Title required"}"#);
    let mut state = JobPortalState { jobs: vec![job(1, "Existing", "Pune")], ..JobPortalState::default() };
    state.toggle_panel(JobPanel::PostJob);

    let result = block_on(fx.client.post_job(&state.new_job));
    if let Err(err) = &result {
        state.job_post_failed(err);
    }

    assert!(result.is_err());
    assert_eq!(state.job_errors.field("title"), Some("Title required"));
    assert_eq!(state.jobs.len(), 1);
    assert_eq!(state.panel, JobPanel::PostJob);
}

#[test]
fn non_validation_post_failure_is_general() {
    let mut state = JobPortalState::default();
    state.job_post_failed(&ApiError::General { status: 500, message: "Boom".to_owned() });
    assert!(state.job_errors.fields.is_empty());
    assert_eq!(state.job_errors.general.as_deref(), Some("Error posting job: Boom"));
}

#[test]
fn status_change_rolls_back_on_failure() {
    let fx = Fixture::signed_in(&["MANAGER"]);
    fx.transport.respond(500, r#"{"message":"down"}"#);
    let mut state = JobPortalState { applications: vec![application(5, 1, 7, "Ada")], ..JobPortalState::default() };

    let snapshot = state.begin_status_change(5, ApplicationStatus::Accepted).unwrap();
    assert_eq!(state.applications[0].status, ApplicationStatus::Accepted);

    let outcome = block_on(fx.client.set_application_status(5, ApplicationStatus::Accepted));
    snapshot.settle(&mut state.applications, &outcome);

    assert_eq!(state.applications[0].status, ApplicationStatus::Pending);
}

#[test]
fn failed_status_change_keeps_applications_reloaded_in_flight() {
    let fx = Fixture::signed_in(&["MANAGER"]);
    fx.transport.respond(500, r#"{"message":"down"}"#);
    let mut state = JobPortalState { applications: vec![application(5, 1, 7, "Ada")], ..JobPortalState::default() };

    let snapshot = state.begin_status_change(5, ApplicationStatus::Accepted).unwrap();
    let mut reloaded = application(5, 1, 7, "Ada");
    reloaded.status = ApplicationStatus::Accepted;
    state.applications = vec![reloaded, application(6, 2, 8, "Bob")];

    let outcome = block_on(fx.client.set_application_status(5, ApplicationStatus::Accepted));
    snapshot.settle(&mut state.applications, &outcome);

    assert_eq!(state.applications.len(), 2);
    assert_eq!(state.applications[0].status, ApplicationStatus::Pending);
    assert_eq!(state.applications[1].id, 6);
}

#[test]
fn status_change_for_unknown_application_is_ignored() {
    let mut state = JobPortalState::default();
    assert!(state.begin_status_change(99, ApplicationStatus::Declined).is_none());
}

#[test]
fn delete_job_messages_by_status() {
    assert_eq!(
        delete_job_message(&ApiError::General { status: 404, message: String::new() }),
        "Job not found or already deleted."
    );
    assert_eq!(
        delete_job_message(&ApiError::Unauthorized { status: 403, message: None }),
        "You are not authorized to delete this job."
    );
}

#[test]
fn apply_form_requires_numeric_experience() {
    let mut form = ApplyForm::for_job(&job(3, "Engineer", "Remote"));
    form.resume_link = "https://cv".to_owned();
    form.skills = "rust".to_owned();
    form.years_of_experience = "three".to_owned();
    assert!(form.validate().field("yearsOfExperience").is_some());
    form.years_of_experience = "3".to_owned();
    assert!(form.validate().is_empty());
    assert_eq!(form.to_request().years_of_experience, 3);
}

#[test]
fn toggling_open_panel_returns_to_jobs() {
    let mut state = JobPortalState::default();
    state.toggle_panel(JobPanel::AllApplications);
    assert_eq!(state.panel, JobPanel::AllApplications);
    state.toggle_panel(JobPanel::AllApplications);
    assert_eq!(state.panel, JobPanel::Jobs);
}
