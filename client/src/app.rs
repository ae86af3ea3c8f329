//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the single [`SessionContext`] from browser storage, wraps it
//! in the authenticated [`PortalClient`], and bridges the session publisher
//! into Leptos signals so views react to sign-in and sign-out. Redirects
//! requested outside the router (the request authenticator) are queued in
//! [`AppSignals::pending_redirect`] and performed by `RedirectListener`.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::config::{API_BASE_META, ClientConfig};
use crate::net::http::{ApiClient, BrowserTransport, Redirector};
use crate::pages::{
    dashboard::DashboardPage, exhibition::ExhibitionPage, exhibition_details::ExhibitionDetailsPage, faq::FaqPage,
    home::HomePage, job_portal::JobPortalPage, leaderboard::LeaderboardPage, sign_in::SignInPage,
};
use crate::state::credential_store::CredentialStore;
use crate::state::session::SessionContext;
use crate::util::auth::RequireAuth;

/// The app's authenticated backend client.
pub type PortalClient = ApiClient<BrowserTransport>;

/// App-wide reactive flags.
#[derive(Clone, Copy, Debug)]
pub struct AppSignals {
    /// Mirrors the session publisher.
    pub logged_in: RwSignal<bool>,
    /// Set once the client has hydrated; false during SSR.
    pub hydrated: RwSignal<bool>,
    pub pending_redirect: RwSignal<Option<String>>,
}

impl AppSignals {
    /// Logged in, as far as the rendered page is concerned.
    pub fn signed_in(self) -> bool {
        self.hydrated.get() && self.logged_in.get()
    }

    pub fn redirect_to(self, path: &str) {
        self.pending_redirect.set(Some(path.to_owned()));
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions, api_base: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api_base/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::detect();
    let session = SessionContext::restore(CredentialStore::browser());

    let app = AppSignals {
        logged_in: RwSignal::new(session.is_logged_in()),
        hydrated: RwSignal::new(false),
        pending_redirect: RwSignal::new(None),
    };
    let logged_in = app.logged_in;
    let subscription = session.subscribe(move |value| {
        logged_in.try_set(value);
    });
    let unsubscribe_from = session.clone();
    on_cleanup(move || unsubscribe_from.unsubscribe(subscription));

    let pending = app.pending_redirect;
    let redirect: Redirector = Arc::new(move |path: &str| {
        pending.try_set(Some(path.to_owned()));
    });
    let client: PortalClient =
        ApiClient::new(config.clone(), session, BrowserTransport::new(config.request_timeout), redirect);

    Effect::new(move || app.hydrated.set(true));

    log::debug!("app: api base {}", config.api_base);
    provide_context(config);
    provide_context(app);
    provide_context(client);

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text="Company Portal"/>

        <Router>
            <RedirectListener/>
            <NavBar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("home") view=HomePage/>
                    <Route path=StaticSegment("signin_signup") view=SignInPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("job-portal")
                        view=|| view! { <RequireAuth><JobPortalPage/></RequireAuth> }
                    />
                    <Route path=StaticSegment("faq") view=|| view! { <RequireAuth><FaqPage/></RequireAuth> }/>
                    <Route
                        path=StaticSegment("exhibition")
                        view=|| view! { <RequireAuth><ExhibitionPage/></RequireAuth> }
                    />
                    <Route
                        path=(StaticSegment("exhibition"), ParamSegment("id"))
                        view=|| view! { <RequireAuth><ExhibitionDetailsPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("leaderboard")
                        view=|| view! { <RequireAuth><LeaderboardPage/></RequireAuth> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

/// Performs redirects queued through [`AppSignals::redirect_to`].
#[component]
fn RedirectListener() -> impl IntoView {
    let app = expect_context::<AppSignals>();
    let navigate = use_navigate();
    let location = use_location();

    Effect::new(move || {
        if app.pending_redirect.get().is_none() {
            return;
        }
        let Some(path) = app.pending_redirect.try_update(Option::take).flatten() else {
            return;
        };
        if location.pathname.get_untracked() == path {
            return;
        }
        log::debug!("app: redirecting to {path}");
        navigate(&path, NavigateOptions::default());
    });
}
