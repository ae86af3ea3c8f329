//! Sign-in screen with sign-up, forgot-password and reset-password sub-forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only writer of a new session: a successful sign-in goes
//! through `ApiClient::sign_in`, which records the session and publishes
//! logged-in before the page shows its banner and moves on to `/home`.

use std::time::Duration;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::app::{AppSignals, PortalClient};
use crate::components::banner::{BannerView, Flash};
use crate::components::field_error::FormError;
use crate::components::text_field::{Binding, TextField};
use crate::net::error::ApiError;
use crate::state::auth_forms::{AuthForm, AuthScreen, parse_employee_id};
use crate::state::forms::FormErrors;
use crate::util::liveness::Liveness;

/// Where a signed-in user lands.
pub const HOME_PATH: &str = "/home";

/// Pause between the success banner and leaving the page.
pub const SIGN_IN_REDIRECT_DELAY: Duration = Duration::from_secs(1);

#[component]
pub fn SignInPage() -> impl IntoView {
    let app = expect_context::<AppSignals>();
    let client = expect_context::<PortalClient>();
    let screen = RwSignal::new(AuthScreen::default());
    let flash = Flash::new();
    let busy = RwSignal::new(false);
    let alive = Liveness::install();

    // Already signed in on arrival: go home. Later sign-ins redirect after the banner.
    Effect::new(move || {
        if app.hydrated.get() && app.logged_in.get_untracked() {
            app.redirect_to(HOME_PATH);
        }
    });

    let errors = Signal::derive(move || screen.with(|s| s.errors.clone()));
    let set_errors = move |e: FormErrors| screen.update(|s| s.errors = e);

    let on_sign_in = {
        let client = client.clone();
        let alive = alive.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            let form = screen.with_untracked(|s| s.sign_in.clone());
            let check = form.validate();
            if !check.is_empty() {
                set_errors(check);
                return;
            }
            set_errors(FormErrors::default());
            busy.set(true);
            let client = client.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = client.sign_in(form.email.trim(), &form.password).await;
                if !alive.is_alive() {
                    return;
                }
                busy.set(false);
                match result {
                    Ok(_) => {
                        flash.success("Sign in successful!");
                        after_sign_in_delay().await;
                        app.redirect_to(HOME_PATH);
                    }
                    Err(ApiError::Unauthorized { message: None, .. }) => {
                        set_errors(FormErrors::general("Sign in failed. Please check your credentials."));
                    }
                    Err(err) => set_errors(FormErrors::from_api(&err)),
                }
            });
        }
    };

    let on_sign_up = {
        let client = client.clone();
        let alive = alive.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let form = screen.with_untracked(|s| s.sign_up.clone());
            let check = form.validate();
            if !check.is_empty() {
                set_errors(check);
                return;
            }
            set_errors(FormErrors::default());
            busy.set(true);
            let client = client.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = client.register(&form.to_request()).await;
                if !alive.is_alive() {
                    return;
                }
                busy.set(false);
                match result {
                    Ok(resp) => {
                        screen.update(|s| s.signed_up(resp.email.as_deref()));
                        flash.success(
                            resp.message.unwrap_or_else(|| "Account created successfully! Please sign in.".to_owned()),
                        );
                    }
                    Err(err) => set_errors(FormErrors::from_api(&err)),
                }
            });
        }
    };

    let on_fetch_details = {
        let client = client.clone();
        let alive = alive.clone();
        move |_| {
            let raw = screen.with_untracked(|s| s.sign_up.employee_id.clone());
            screen.update(|s| s.sign_up.clear_prefill());
            let id = match parse_employee_id(&raw) {
                Ok(id) => id,
                Err(message) => {
                    let mut errors = FormErrors::default();
                    errors.set_field("employeeId", message);
                    set_errors(errors);
                    return;
                }
            };
            set_errors(FormErrors::default());
            busy.set(true);
            let client = client.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = client.employee_details(id).await;
                if !alive.is_alive() {
                    return;
                }
                busy.set(false);
                match result {
                    Ok(details) => {
                        screen.update(|s| s.sign_up.apply_prefill(&details));
                        flash.success("Employee details loaded successfully!");
                    }
                    Err(err) if err.is_not_found() => set_errors(FormErrors::general(
                        "Could not fetch employee details. Please check the ID and try again.",
                    )),
                    Err(err) => set_errors(FormErrors::from_api(&err)),
                }
            });
        }
    };

    let on_request_reset = {
        let client = client.clone();
        let alive = alive.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let check = screen.with_untracked(AuthScreen::validate_forgot);
            if !check.is_empty() {
                set_errors(check);
                return;
            }
            let email = screen.with_untracked(|s| s.forgot_email.trim().to_owned());
            busy.set(true);
            let client = client.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = client.forgot_password(&email).await;
                if !alive.is_alive() {
                    return;
                }
                busy.set(false);
                match result {
                    Ok(resp) => {
                        screen.update(AuthScreen::reset_requested);
                        flash.success(resp.message.unwrap_or_else(|| "OTP sent to your personal email.".to_owned()));
                    }
                    Err(err) => set_errors(FormErrors::from_api(&err)),
                }
            });
        }
    };

    let on_reset = {
        let client = client.clone();
        let alive = alive.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let form = screen.with_untracked(|s| s.reset.clone());
            let check = form.validate();
            if !check.is_empty() {
                set_errors(check);
                return;
            }
            busy.set(true);
            let client = client.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = client.reset_password(&form.to_request()).await;
                if !alive.is_alive() {
                    return;
                }
                busy.set(false);
                match result {
                    Ok(resp) => {
                        screen.update(AuthScreen::password_reset);
                        flash.success(resp.message.unwrap_or_else(|| "Password reset successfully.".to_owned()));
                    }
                    Err(err) => set_errors(FormErrors::from_api(&err)),
                }
            });
        }
    };

    let switch = move |form: AuthForm| {
        flash.clear();
        screen.update(|s| s.switch_to(form));
    };
    let prefilled = Signal::derive(move || screen.with(|s| s.sign_up.prefilled));
    let employee_id = Binding {
        value: Signal::derive(move || screen.with(|s| s.sign_up.employee_id.clone())),
        set: Callback::new(move |v: String| screen.update(|s| s.sign_up.set_employee_id(&v))),
    };

    let sign_in_view = move || {
        view! {
            <form class="auth-form" on:submit=on_sign_in.clone()>
                <h2>"Sign In"</h2>
                <TextField
                    label="Email"
                    input_type="email"
                    field="email"
                    errors=errors
                    binding=Binding::lens(screen, |s| s.sign_in.email.clone(), |s, v| s.sign_in.email = v)
                />
                <TextField
                    label="Password"
                    input_type="password"
                    field="password"
                    errors=errors
                    binding=Binding::lens(screen, |s| s.sign_in.password.clone(), |s, v| s.sign_in.password = v)
                />
                <FormError errors=errors/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Sign In"
                </button>
                <div class="auth-form__links">
                    <button type="button" class="btn btn--link" on:click=move |_| switch(AuthForm::ForgotPassword)>
                        "Forgot password?"
                    </button>
                    <button type="button" class="btn btn--link" on:click=move |_| switch(AuthForm::SignUp)>
                        "Create an account"
                    </button>
                </div>
            </form>
        }
    };

    let sign_up_view = move || {
        view! {
            <form class="auth-form" on:submit=on_sign_up.clone()>
                <h2>"Sign Up"</h2>
                <div class="auth-form__row">
                    <TextField label="Employee ID" field="employeeId" errors=errors binding=employee_id/>
                    <button type="button" class="btn" on:click=on_fetch_details.clone() disabled=move || busy.get()>
                        "Fetch Details"
                    </button>
                </div>
                <TextField
                    label="First name"
                    field="firstName"
                    errors=errors
                    readonly=prefilled
                    binding=Binding::lens(screen, |s| s.sign_up.first_name.clone(), |s, v| s.sign_up.first_name = v)
                />
                <TextField
                    label="Last name"
                    field="lastName"
                    errors=errors
                    readonly=prefilled
                    binding=Binding::lens(screen, |s| s.sign_up.last_name.clone(), |s, v| s.sign_up.last_name = v)
                />
                <TextField
                    label="Organization email"
                    input_type="email"
                    field="email"
                    errors=errors
                    readonly=prefilled
                    binding=Binding::lens(screen, |s| s.sign_up.email.clone(), |s, v| s.sign_up.email = v)
                />
                <TextField
                    label="Password"
                    input_type="password"
                    field="password"
                    errors=errors
                    binding=Binding::lens(screen, |s| s.sign_up.password.clone(), |s, v| s.sign_up.password = v)
                />
                <TextField
                    label="Contact information"
                    field="contactInformation"
                    errors=errors
                    binding=Binding::lens(
                        screen,
                        |s| s.sign_up.contact_information.clone(),
                        |s, v| s.sign_up.contact_information = v,
                    )
                />
                <TextField
                    label="Department"
                    field="department"
                    errors=errors
                    binding=Binding::lens(screen, |s| s.sign_up.department.clone(), |s, v| s.sign_up.department = v)
                />
                <TextField
                    label="Job title"
                    field="jobTitle"
                    errors=errors
                    binding=Binding::lens(screen, |s| s.sign_up.job_title.clone(), |s, v| s.sign_up.job_title = v)
                />
                <TextField
                    label="Personal email"
                    input_type="email"
                    field="personalEmail"
                    errors=errors
                    binding=Binding::lens(
                        screen,
                        |s| s.sign_up.personal_email.clone(),
                        |s, v| s.sign_up.personal_email = v,
                    )
                />
                <FormError errors=errors/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Sign Up"
                </button>
                <button type="button" class="btn btn--link" on:click=move |_| switch(AuthForm::SignIn)>
                    "Already have an account? Sign in"
                </button>
            </form>
        }
    };

    let forgot_view = move || {
        view! {
            <form class="auth-form" on:submit=on_request_reset.clone()>
                <h2>"Forgot Password"</h2>
                <TextField
                    label="Personal email"
                    input_type="email"
                    field="personalEmail"
                    errors=errors
                    binding=Binding::lens(screen, |s| s.forgot_email.clone(), |s, v| s.forgot_email = v)
                />
                <FormError errors=errors/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Send OTP"
                </button>
                <button type="button" class="btn btn--link" on:click=move |_| switch(AuthForm::SignIn)>
                    "Back to sign in"
                </button>
            </form>
        }
    };

    let reset_view = move || {
        view! {
            <form class="auth-form" on:submit=on_reset.clone()>
                <h2>"Reset Password"</h2>
                <TextField
                    label="Organization email"
                    input_type="email"
                    field="organizationEmail"
                    errors=errors
                    binding=Binding::lens(
                        screen,
                        |s| s.reset.organization_email.clone(),
                        |s, v| s.reset.organization_email = v,
                    )
                />
                <TextField
                    label="OTP"
                    field="token"
                    errors=errors
                    binding=Binding::lens(screen, |s| s.reset.token.clone(), |s, v| s.reset.token = v)
                />
                <TextField
                    label="New password"
                    input_type="password"
                    field="newPassword"
                    errors=errors
                    binding=Binding::lens(screen, |s| s.reset.new_password.clone(), |s, v| s.reset.new_password = v)
                />
                <FormError errors=errors/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Reset Password"
                </button>
                <button type="button" class="btn btn--link" on:click=move |_| switch(AuthForm::SignIn)>
                    "Back to sign in"
                </button>
            </form>
        }
    };

    view! {
        <div class="auth-page">
            <BannerView flash=flash/>
            {move || match screen.with(|s| s.form) {
                AuthForm::SignIn => sign_in_view().into_any(),
                AuthForm::SignUp => sign_up_view().into_any(),
                AuthForm::ForgotPassword => forgot_view().into_any(),
                AuthForm::ResetPassword => reset_view().into_any(),
            }}
        </div>
    }
}

async fn after_sign_in_delay() {
    #[cfg(feature = "hydrate")]
    {
        let ms = u32::try_from(SIGN_IN_REDIRECT_DELAY.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}
