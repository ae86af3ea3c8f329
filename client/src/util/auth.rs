//! Route guard for protected screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route wraps its page in [`RequireAuth`], so the redirect
//! behavior is identical everywhere. The decision itself is the pure
//! [`guard`] function; it reads the logged-in value and never touches the
//! session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppSignals;
use crate::net::http::SIGN_IN_PATH;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

pub fn guard(logged_in: bool) -> GuardDecision {
    if logged_in { GuardDecision::Allow } else { GuardDecision::Redirect(SIGN_IN_PATH) }
}

/// Placeholder text while a protected page cannot render yet.
pub fn placeholder_text(hydrated: bool) -> &'static str {
    if hydrated { "Redirecting to sign in..." } else { "Loading..." }
}

/// Redirect to sign-in whenever the client is hydrated and nobody is logged in.
pub fn install_unauth_redirect<F>(app: AppSignals, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if !app.hydrated.get() {
            return;
        }
        if let GuardDecision::Redirect(path) = guard(app.logged_in.get()) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Render `children` only for a logged-in user.
///
/// The server and the first client render show the placeholder; stored
/// credentials are only consulted once the client has hydrated.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let app = expect_context::<AppSignals>();
    install_unauth_redirect(app, use_navigate());

    view! {
        <Show
            when=move || app.signed_in()
            fallback=move || {
                view! {
                    <div class="guard-placeholder">
                        <p>{move || placeholder_text(app.hydrated.get())}</p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
