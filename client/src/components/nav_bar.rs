//! Top navigation bar.
//!
//! Links to protected screens are only shown once the client knows a user is
//! signed in; the guard still protects the routes themselves.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::{AppSignals, PortalClient};
use crate::net::http::SIGN_IN_PATH;

#[component]
pub fn NavBar() -> impl IntoView {
    let app = expect_context::<AppSignals>();
    let client = expect_context::<PortalClient>();

    let on_logout = move |_| {
        client.session().logout();
        app.redirect_to(SIGN_IN_PATH);
    };

    view! {
        <nav class="nav-bar">
            <A href="/home" attr:class="nav-bar__brand">"Company Portal"</A>
            <Show when=move || app.signed_in()>
                <A href="/dashboard">"Dashboard"</A>
                <A href="/job-portal">"Job Portal"</A>
                <A href="/faq">"FAQ"</A>
                <A href="/exhibition">"Exhibition"</A>
                <A href="/leaderboard">"Leaderboard"</A>
            </Show>
            <span class="nav-bar__spacer"></span>
            <Show
                when=move || app.signed_in()
                fallback=|| view! { <A href="/signin_signup">"Sign In"</A> }
            >
                <button class="btn nav-bar__logout" on:click=on_logout.clone()>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
