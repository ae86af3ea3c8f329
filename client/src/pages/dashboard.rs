//! Dashboard: the signed-in user's profile and their own uploads.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads `/api/users/me` and `/api/uploads/my-uploads` on mount. Uploads are
//! created and deleted here and show up in the exhibition once saved.

use leptos::prelude::*;

use crate::app::{AppSignals, PortalClient};
use crate::components::banner::{BannerView, Flash};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::field_error::FormError;
use crate::components::text_field::{Binding, TextField};
use crate::net::http::SIGN_IN_PATH;
use crate::net::types::UserProfile;
use crate::state::dashboard::{DashboardState, delete_upload_message};
use crate::state::forms::FormErrors;
use crate::util::liveness::Liveness;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let app = expect_context::<AppSignals>();
    let client = expect_context::<PortalClient>();
    let state = RwSignal::new(DashboardState::default());
    let loading = RwSignal::new(true);
    let flash = Flash::new();
    let alive = Liveness::install();
    let delete_id = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let client = client.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let profile = client.current_profile().await;
            let uploads = client.my_uploads().await;
            if !alive.is_alive() {
                return;
            }
            match profile {
                Ok(profile) => state.update(|s| s.profile = Some(profile)),
                Err(err) => flash.error(format!("Failed to load user details: {err}")),
            }
            match uploads {
                Ok(uploads) => state.update(|s| s.uploads = uploads),
                Err(err) => flash.error(format!("Failed to load your uploads: {err}")),
            }
            loading.set(false);
        });
    }

    let on_save_profile = {
        let client = client.clone();
        let alive = alive.clone();
        Callback::new(move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(draft) = state.with_untracked(|s| s.profile_draft.clone()) else {
                return;
            };
            let client = client.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = client.update_profile(&draft).await;
                if !alive.is_alive() {
                    return;
                }
                match result {
                    Ok(profile) => {
                        state.update(|s| s.profile_saved(profile));
                        flash.success("Profile updated successfully!");
                    }
                    Err(err) => state.update(|s| s.profile_errors = FormErrors::from_api(&err)),
                }
            });
        })
    };

    let on_create_upload = {
        let client = client.clone();
        let alive = alive.clone();
        Callback::new(move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(employee_id) = client.session().employee_id() else {
                return;
            };
            let form = state.with_untracked(|s| s.upload_form.clone());
            let check = form.validate();
            if !check.is_empty() {
                state.update(|s| s.upload_errors = check);
                return;
            }
            let request = form.to_request(employee_id);
            let client = client.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = client.create_upload(&request).await;
                if !alive.is_alive() {
                    return;
                }
                match result {
                    Ok(upload) => {
                        state.update(|s| s.upload_created(upload));
                        flash.success("Project uploaded successfully!");
                    }
                    Err(err) => state.update(|s| s.upload_errors = FormErrors::from_api(&err)),
                }
            });
        })
    };

    let on_confirm_delete = {
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
                let result = client.delete_upload(&id).await;
                if !alive.is_alive() {
                    return;
                }
                match result {
                    Ok(()) => {
                        state.update(|s| s.upload_deleted(&id));
                        flash.success("Upload deleted successfully!");
                    }
                    Err(err) => flash.error(delete_upload_message(&err)),
                }
            });
        })
    };
    let on_cancel_delete = Callback::new(move |()| delete_id.set(None));

    let on_logout = {
        let client = client.clone();
        move |_| {
            client.session().logout();
            app.redirect_to(SIGN_IN_PATH);
        }
    };

    let profile_errors = Signal::derive(move || state.with(|s| s.profile_errors.clone()));
    let upload_errors = Signal::derive(move || state.with(|s| s.upload_errors.clone()));
    let draft = move |get: fn(&UserProfile) -> String, set: fn(&mut UserProfile, String)| Binding {
        value: Signal::derive(move || state.with(|s| s.profile_draft.as_ref().map(get).unwrap_or_default())),
        set: Callback::new(move |v: String| {
            state.update(|s| {
                if let Some(p) = s.profile_draft.as_mut() {
                    set(p, v);
                }
            });
        }),
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <button class="btn" on:click=on_logout>
                    "Logout"
                </button>
            </header>
            <BannerView flash=flash/>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <section class="dashboard-page__profile">
                    <h2>"Profile"</h2>
                    <Show
                        when=move || state.with(|s| s.profile_draft.is_some())
                        fallback=move || {
                            view! {
                                <ProfileCard profile=Signal::derive(move || state.with(|s| s.profile.clone()))/>
                                <button
                                    class="btn"
                                    disabled=move || state.with(|s| s.profile.is_none())
                                    on:click=move |_| state.update(DashboardState::start_edit_profile)
                                >
                                    "Edit Profile"
                                </button>
                            }
                        }
                    >
                        <form class="dashboard-page__form" on:submit=move |ev| on_save_profile.run(ev)>
                            <TextField
                                label="First name"
                                field="firstName"
                                errors=profile_errors
                                binding=draft(|p| p.first_name.clone(), |p, v| p.first_name = v)
                            />
                            <TextField
                                label="Last name"
                                field="lastName"
                                errors=profile_errors
                                binding=draft(|p| p.last_name.clone(), |p, v| p.last_name = v)
                            />
                            <TextField
                                label="Contact information"
                                field="contactInformation"
                                errors=profile_errors
                                binding=draft(|p| p.contact_information.clone(), |p, v| p.contact_information = v)
                            />
                            <TextField
                                label="Department"
                                field="department"
                                errors=profile_errors
                                binding=draft(|p| p.department.clone(), |p, v| p.department = v)
                            />
                            <TextField
                                label="Job title"
                                field="jobTitle"
                                errors=profile_errors
                                binding=draft(|p| p.job_title.clone(), |p, v| p.job_title = v)
                            />
                            <FormError errors=profile_errors/>
                            <div class="dialog__actions">
                                <button
                                    type="button"
                                    class="btn"
                                    on:click=move |_| state.update(DashboardState::cancel_edit_profile)
                                >
                                    "Cancel"
                                </button>
                                <button type="submit" class="btn btn--primary">
                                    "Save"
                                </button>
                            </div>
                        </form>
                    </Show>
                </section>

                <section class="dashboard-page__uploads">
                    <h2>"My Uploads"</h2>
                    <form class="dashboard-page__form" on:submit=move |ev| on_create_upload.run(ev)>
                        <TextField
                            label="Title"
                            field="title"
                            errors=upload_errors
                            binding=Binding::lens(state, |s| s.upload_form.title.clone(), |s, v| s.upload_form.title = v)
                        />
                        <TextField
                            label="Description"
                            field="description"
                            multiline=true
                            errors=upload_errors
                            binding=Binding::lens(
                                state,
                                |s| s.upload_form.description.clone(),
                                |s, v| s.upload_form.description = v,
                            )
                        />
                        <TextField
                            label="Project duration"
                            field="projectDuration"
                            errors=upload_errors
                            binding=Binding::lens(
                                state,
                                |s| s.upload_form.project_duration.clone(),
                                |s, v| s.upload_form.project_duration = v,
                            )
                        />
                        <TextField
                            label="File URL"
                            field="fileUrl"
                            errors=upload_errors
                            binding=Binding::lens(
                                state,
                                |s| s.upload_form.file_url.clone(),
                                |s, v| s.upload_form.file_url = v,
                            )
                        />
                        <TextField
                            label="Start date"
                            field="startedDate"
                            input_type="date"
                            errors=upload_errors
                            binding=Binding::lens(
                                state,
                                |s| s.upload_form.started_date.clone(),
                                |s, v| s.upload_form.started_date = v,
                            )
                        />
                        <TextField
                            label="End date"
                            field="endDate"
                            input_type="date"
                            errors=upload_errors
                            binding=Binding::lens(
                                state,
                                |s| s.upload_form.end_date.clone(),
                                |s, v| s.upload_form.end_date = v,
                            )
                        />
                        <FormError errors=upload_errors/>
                        <button type="submit" class="btn btn--primary">
                            "Upload Project"
                        </button>
                    </form>
                    <Show
                        when=move || state.with(|s| !s.uploads.is_empty())
                        fallback=|| view! { <p>"You have not uploaded any projects yet."</p> }
                    >
                        <ul class="upload-list">
                            {move || {
                                state
                                    .get()
                                    .uploads
                                    .into_iter()
                                    .map(|upload| {
                                        let id = upload.id.clone();
                                        let rating = upload
                                            .rating
                                            .map_or_else(|| "Not rated".to_owned(), |r| format!("Rating: {r:.1}"));
                                        view! {
                                            <li class="upload-list__item">
                                                <div>
                                                    <strong>{upload.title}</strong>
                                                    <span class="upload-list__meta">{rating}</span>
                                                </div>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| delete_id.set(Some(id.clone()))
                                                >
                                                    "Delete"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                </section>
            </Show>
            <Show when=move || delete_id.get().is_some()>
                <ConfirmDialog
                    title="Delete Upload"
                    message="This will permanently delete this project upload."
                    on_confirm=on_confirm_delete
                    on_cancel=on_cancel_delete
                />
            </Show>
        </div>
    }
}

#[component]
fn ProfileCard(profile: Signal<Option<UserProfile>>) -> impl IntoView {
    let field = move |get: fn(&UserProfile) -> String| move || profile.with(|p| p.as_ref().map(get).unwrap_or_default());
    view! {
        <dl class="profile-card">
            <dt>"Employee ID"</dt>
            <dd>{field(|p| p.employee_id.to_string())}</dd>
            <dt>"Name"</dt>
            <dd>{field(|p| format!("{} {}", p.first_name, p.last_name))}</dd>
            <dt>"Email"</dt>
            <dd>{field(|p| p.email.clone())}</dd>
            <dt>"Contact"</dt>
            <dd>{field(|p| p.contact_information.clone())}</dd>
            <dt>"Department"</dt>
            <dd>{field(|p| p.department.clone())}</dd>
            <dt>"Job title"</dt>
            <dd>{field(|p| p.job_title.clone())}</dd>
        </dl>
    }
}
