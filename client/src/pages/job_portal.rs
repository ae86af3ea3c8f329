//! Job portal: job board for everyone, posting and review for managers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Managers post and delete jobs and accept or decline applications.
//! Users apply and track their own applications. Role checks here only decide
//! which controls are shown; the backend enforces them.

use leptos::prelude::*;

use crate::app::PortalClient;
use crate::components::banner::{BannerView, Flash};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::field_error::FormError;
use crate::components::text_field::{Binding, TextField};
use crate::net::types::{Application, ApplicationStatus, Job};
use crate::state::jobs::{ApplyForm, JobPanel, JobPortalState, SALARY_RANGES, delete_job_message};
use crate::util::liveness::Liveness;

#[component]
pub fn JobPortalPage() -> impl IntoView {
    let client = expect_context::<PortalClient>();
    let session = client.session().session();
    let is_manager = session.is_manager();
    let is_user = session.is_user();
    let employee_id = session.employee_id;

    let state = RwSignal::new(JobPortalState::default());
    let flash = Flash::new();
    let alive = Liveness::install();
    let delete_id = RwSignal::new(None::<i64>);

    let load_jobs = {
        let client = client.clone();
        let alive = alive.clone();
        Callback::new(move |()| {
            let client = client.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = client.jobs().await;
                if !alive.is_alive() {
                    return;
                }
                match result {
                    Ok(jobs) => state.update(|s| s.jobs = jobs),
                    Err(err) => {
                        state.update(|s| s.jobs.clear());
                        flash.error(format!("Failed to load jobs: {err}"));
                    }
                }
            });
        })
    };

    let load_all_applications = {
        let client = client.clone();
        let alive = alive.clone();
        Callback::new(move |()| {
            let client = client.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = client.all_applications().await;
                if !alive.is_alive() {
                    return;
                }
                match result {
                    Ok(apps) => state.update(|s| s.applications = apps),
                    Err(err) => flash.error(format!("Failed to load applications: {err}")),
                }
            });
        })
    };

    let load_my_applications = {
        let client = client.clone();
        let alive = alive.clone();
        Callback::new(move |()| {
            let Some(employee_id) = employee_id else {
                return;
            };
            let client = client.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = client.applications_for_employee(employee_id).await;
                if !alive.is_alive() {
                    return;
                }
                match result {
                    Ok(apps) => state.update(|s| s.my_applications = apps),
                    Err(err) => {
                        state.update(|s| s.my_applications.clear());
                        flash.error(format!("Failed to load your applications: {err}"));
                    }
                }
            });
        })
    };

    #[cfg(feature = "hydrate")]
    {
        load_jobs.run(());
        if is_user {
            load_my_applications.run(());
        }
    }

    let toggle = move |panel: JobPanel| {
        state.update(|s| s.toggle_panel(panel));
        match state.with_untracked(|s| s.panel) {
            JobPanel::AllApplications => load_all_applications.run(()),
            JobPanel::MyApplications => load_my_applications.run(()),
            JobPanel::Jobs | JobPanel::PostJob => {}
        }
    };

    let submit_job = {
        let client = client.clone();
        let alive = alive.clone();
        Callback::new(move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let request = state.with_untracked(|s| s.new_job.clone());
            let client = client.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = client.post_job(&request).await;
                if !alive.is_alive() {
                    return;
                }
                match result {
                    Ok(_) => {
                        state.update(JobPortalState::job_posted);
                        flash.success("Job posted successfully!");
                        load_jobs.run(());
                    }
                    Err(err) => state.update(|s| s.job_post_failed(&err)),
                }
            });
        })
    };

    let submit_application = {
        let client = client.clone();
        let alive = alive.clone();
        Callback::new(move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(form) = state.with_untracked(|s| s.apply.clone()) else {
                return;
            };
            let check = form.validate();
            if !check.is_empty() {
                state.update(|s| s.apply_errors = check);
                return;
            }
            let client = client.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = client.apply(&form.to_request()).await;
                if !alive.is_alive() {
                    return;
                }
                match result {
                    Ok(_) => {
                        state.update(JobPortalState::close_apply);
                        flash.success("Application submitted successfully!");
                        load_my_applications.run(());
                    }
                    Err(err) => state.update(|s| s.apply_failed(&err)),
                }
            });
        })
    };

    let set_status = {
        let client = client.clone();
        let alive = alive.clone();
        Callback::new(move |(id, status): (i64, ApplicationStatus)| {
            let Some(snapshot) = state.try_update(|s| s.begin_status_change(id, status)).flatten() else {
                log::warn!("jobs: application {id} not in local list");
                return;
            };
            let client = client.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let outcome = client.set_application_status(id, status).await;
                if !alive.is_alive() {
                    return;
                }
                if let Err(err) = &outcome {
                    flash.error(format!("Failed to update application status: {err}"));
                }
                state.update(|s| snapshot.settle(&mut s.applications, &outcome));
            });
        })
    };

    let confirm_delete = {
        let client = client.clone();
        let alive = alive.clone();
        Callback::new(move |()| {
            let Some(id) = delete_id.get_untracked() else {
                return;
            };
            delete_id.set(None);
            let client = client.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = client.delete_job(id).await;
                if !alive.is_alive() {
                    return;
                }
                match result {
                    Ok(()) => {
                        state.update(|s| s.remove_job(id));
                        flash.success("Job deleted successfully!");
                    }
                    Err(err) => {
                        flash.error(delete_job_message(&err));
                        load_jobs.run(());
                    }
                }
            });
        })
    };

    let job_errors = Signal::derive(move || state.with(|s| s.job_errors.clone()));
    let apply_errors = Signal::derive(move || state.with(|s| s.apply_errors.clone()));
    let panel = move || state.with(|s| s.panel);

    view! {
        <div class="job-portal">
            <header class="job-portal__header">
                <h1>"Job Portal"</h1>
                <div class="job-portal__actions">
                    <button class="btn" on:click=move |_| state.update(|s| s.panel = JobPanel::Jobs)>
                        "Available Jobs"
                    </button>
                    <Show when=move || is_manager>
                        <button class="btn" on:click=move |_| toggle(JobPanel::PostJob)>
                            "Post a Job"
                        </button>
                        <button class="btn" on:click=move |_| toggle(JobPanel::AllApplications)>
                            "View Applications"
                        </button>
                    </Show>
                    <Show when=move || is_user>
                        <button class="btn" on:click=move |_| toggle(JobPanel::MyApplications)>
                            "My Applications"
                        </button>
                    </Show>
                </div>
            </header>
            <BannerView flash=flash/>

            <Show when=move || panel() == JobPanel::PostJob>
                <form class="job-portal__form" on:submit=move |ev| submit_job.run(ev)>
                    <h2>"Post a Job"</h2>
                    <TextField
                        label="Title"
                        field="title"
                        errors=job_errors
                        binding=Binding::lens(state, |s| s.new_job.title.clone(), |s, v| s.new_job.title = v)
                    />
                    <TextField
                        label="Description"
                        field="description"
                        multiline=true
                        errors=job_errors
                        binding=Binding::lens(state, |s| s.new_job.description.clone(), |s, v| s.new_job.description = v)
                    />
                    <TextField
                        label="Location"
                        field="location"
                        errors=job_errors
                        binding=Binding::lens(state, |s| s.new_job.location.clone(), |s, v| s.new_job.location = v)
                    />
                    <label class="form-field">
                        <span class="form-field__label">"Salary"</span>
                        <select
                            class="form-field__input"
                            prop:value=move || state.with(|s| s.new_job.salary.clone())
                            on:change=move |ev| state.update(|s| s.new_job.salary = event_target_value(&ev))
                        >
                            <option value="">"Select a range"</option>
                            {SALARY_RANGES.iter().map(|r| view! { <option value=*r>{*r}</option> }).collect::<Vec<_>>()}
                        </select>
                    </label>
                    <TextField
                        label="Job type"
                        field="jobType"
                        errors=job_errors
                        binding=Binding::lens(state, |s| s.new_job.job_type.clone(), |s, v| s.new_job.job_type = v)
                    />
                    <TextField
                        label="Experience level"
                        field="experienceLevel"
                        errors=job_errors
                        binding=Binding::lens(
                            state,
                            |s| s.new_job.experience_level.clone(),
                            |s, v| s.new_job.experience_level = v,
                        )
                    />
                    <TextField
                        label="Skills required"
                        field="skillsRequired"
                        errors=job_errors
                        binding=Binding::lens(
                            state,
                            |s| s.new_job.skills_required.clone(),
                            |s, v| s.new_job.skills_required = v,
                        )
                    />
                    <FormError errors=job_errors/>
                    <button type="submit" class="btn btn--primary">
                        "Post Job"
                    </button>
                </form>
            </Show>

            <Show when=move || panel() == JobPanel::Jobs>
                <input
                    class="job-portal__search"
                    type="search"
                    placeholder="Search by title, location, description or skills"
                    prop:value=move || state.with(|s| s.job_query.clone())
                    on:input=move |ev| state.update(|s| s.job_query = event_target_value(&ev))
                />
                <div class="job-portal__jobs">
                    {move || {
                        let jobs = state.with(JobPortalState::filtered_jobs);
                        if jobs.is_empty() {
                            return view! { <p>"No jobs found."</p> }.into_any();
                        }
                        jobs.into_iter()
                            .map(|job| {
                                let applied = state.with(|s| s.has_applied(job.id, employee_id));
                                view! {
                                    <JobCard
                                        job=job
                                        is_manager=is_manager
                                        is_user=is_user
                                        applied=applied
                                        on_apply=Callback::new(move |job: Job| state.update(|s| s.open_apply(&job)))
                                        on_delete=Callback::new(move |id: i64| delete_id.set(Some(id)))
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </div>
            </Show>

            <Show when=move || panel() == JobPanel::AllApplications>
                <input
                    class="job-portal__search"
                    type="search"
                    placeholder="Search by applicant, job title or skills"
                    prop:value=move || state.with(|s| s.application_query.clone())
                    on:input=move |ev| state.update(|s| s.application_query = event_target_value(&ev))
                />
                <ApplicationTable
                    applications=Signal::derive(move || state.with(JobPortalState::filtered_applications))
                    on_status=Some(set_status)
                />
            </Show>

            <Show when=move || panel() == JobPanel::MyApplications>
                <ApplicationTable
                    applications=Signal::derive(move || state.with(|s| s.my_applications.clone()))
                    on_status=None
                />
            </Show>

            <Show when=move || state.with(|s| s.apply.is_some())>
                <div class="dialog-backdrop" on:click=move |_| state.update(JobPortalState::close_apply)>
                    <form
                        class="dialog"
                        on:click=move |ev| ev.stop_propagation()
                        on:submit=move |ev| submit_application.run(ev)
                    >
                        <h2>
                            "Apply for "
                            {move || state.with(|s| s.apply.as_ref().map(|a| a.job_title.clone()).unwrap_or_default())}
                        </h2>
                        <TextField
                            label="Resume link"
                            field="resumeLink"
                            errors=apply_errors
                            binding=apply_binding(state, |f| f.resume_link.clone(), |f, v| f.resume_link = v)
                        />
                        <TextField
                            label="Skills"
                            field="skills"
                            errors=apply_errors
                            binding=apply_binding(state, |f| f.skills.clone(), |f, v| f.skills = v)
                        />
                        <TextField
                            label="Years of experience"
                            field="yearsOfExperience"
                            input_type="number"
                            errors=apply_errors
                            binding=apply_binding(
                                state,
                                |f| f.years_of_experience.clone(),
                                |f, v| f.years_of_experience = v,
                            )
                        />
                        <FormError errors=apply_errors/>
                        <div class="dialog__actions">
                            <button
                                type="button"
                                class="btn"
                                on:click=move |_| state.update(JobPortalState::close_apply)
                            >
                                "Cancel"
                            </button>
                            <button type="submit" class="btn btn--primary">
                                "Submit Application"
                            </button>
                        </div>
                    </form>
                </div>
            </Show>

            <Show when=move || delete_id.get().is_some()>
                <ConfirmDialog
                    title="Delete Job"
                    message="Are you sure you want to delete this job? This action cannot be undone."
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |()| delete_id.set(None))
                />
            </Show>
        </div>
    }
}

fn apply_binding(
    state: RwSignal<JobPortalState>,
    get: fn(&ApplyForm) -> String,
    set: fn(&mut ApplyForm, String),
) -> Binding {
    Binding {
        value: Signal::derive(move || state.with(|s| s.apply.as_ref().map(get).unwrap_or_default())),
        set: Callback::new(move |v: String| {
            state.update(|s| {
                if let Some(form) = s.apply.as_mut() {
                    set(form, v);
                }
            });
        }),
    }
}

#[component]
fn JobCard(
    job: Job,
    is_manager: bool,
    is_user: bool,
    applied: bool,
    on_apply: Callback<Job>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let id = job.id;
    let apply_job = job.clone();
    view! {
        <article class="job-card">
            <h3>{job.title}</h3>
            <p class="job-card__meta">
                {job.location} " · " {job.job_type} " · " {job.experience_level}
            </p>
            <p class="job-card__salary">{job.salary}</p>
            <p>{job.description}</p>
            <p class="job-card__skills">"Skills: " {job.skills_required}</p>
            <div class="job-card__actions">
                <Show when=move || is_user>
                    <button
                        class="btn btn--primary"
                        disabled=applied
                        on:click={
                            let apply_job = apply_job.clone();
                            move |_| on_apply.run(apply_job.clone())
                        }
                    >
                        {if applied { "Applied" } else { "Apply Now" }}
                    </button>
                </Show>
                <Show when=move || is_manager>
                    <button class="btn btn--danger" on:click=move |_| on_delete.run(id)>
                        "Delete"
                    </button>
                </Show>
            </div>
        </article>
    }
}

#[component]
fn ApplicationTable(
    applications: Signal<Vec<Application>>,
    on_status: Option<Callback<(i64, ApplicationStatus)>>,
) -> impl IntoView {
    view! {
        <Show
            when=move || applications.with(|a| !a.is_empty())
            fallback=|| view! { <p>"No applications found."</p> }
        >
            <table class="application-table">
                <thead>
                    <tr>
                        <th>"Applicant"</th>
                        <th>"Job"</th>
                        <th>"Skills"</th>
                        <th>"Experience"</th>
                        <th>"Resume"</th>
                        <th>"Status"</th>
                        <th>"Applied"</th>
                        {on_status.map(|_| view! { <th>"Actions"</th> })}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        applications
                            .get()
                            .into_iter()
                            .map(|app| {
                                let id = app.id;
                                let pending = app.status == ApplicationStatus::Pending;
                                let applicant = app
                                    .employee
                                    .as_ref()
                                    .map(|e| format!("{} {}", e.first_name, e.last_name))
                                    .unwrap_or_default();
                                let job_title = app.job.as_ref().map(|j| j.title.clone()).unwrap_or_default();
                                view! {
                                    <tr>
                                        <td>{applicant}</td>
                                        <td>{job_title}</td>
                                        <td>{app.skills}</td>
                                        <td>{app.years_of_experience}</td>
                                        <td>
                                            <a href=app.resume_link target="_blank" rel="noopener">
                                                "Resume"
                                            </a>
                                        </td>
                                        <td>{app.status.as_str()}</td>
                                        <td>{app.applied_date.unwrap_or_default()}</td>
                                        {on_status
                                            .map(|cb| {
                                                view! {
                                                    <td>
                                                        <button
                                                            class="btn"
                                                            disabled=!pending
                                                            on:click=move |_| cb.run((id, ApplicationStatus::Accepted))
                                                        >
                                                            "Accept"
                                                        </button>
                                                        <button
                                                            class="btn btn--danger"
                                                            disabled=!pending
                                                            on:click=move |_| cb.run((id, ApplicationStatus::Declined))
                                                        >
                                                            "Decline"
                                                        </button>
                                                    </td>
                                                }
                                            })}
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </Show>
    }
}
