//! Signed-in session record and its owning context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionContext` is provided once at the app root. The sign-in flow and the
//! request authenticator are the only writers; screens and the route guard
//! read it or subscribe to its publisher. Nothing else holds session state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::credential_store::CredentialStore;
use super::publisher::{SessionPublisher, Subscription};

pub const ROLE_USER: &str = "USER";
pub const ROLE_MANAGER: &str = "MANAGER";

/// Client-held record of the authenticated user.
///
/// Either every field is present (signed in) or the record is treated as
/// signed out; see [`Session::is_complete`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub email: Option<String>,
    pub roles: Option<Vec<String>>,
    pub employee_id: Option<i64>,
}

impl Session {
    /// A fully populated session.
    pub fn signed_in(token: impl Into<String>, email: impl Into<String>, roles: Vec<String>, employee_id: i64) -> Self {
        Self {
            token: Some(token.into()),
            email: Some(email.into()),
            roles: Some(roles),
            employee_id: Some(employee_id),
        }
    }

    /// Every field present; token and email must also be non-empty, since
    /// storage reads empty strings back as absent.
    pub fn is_complete(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        present(&self.token) && present(&self.email) && self.roles.is_some() && self.employee_id.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.email.is_none() && self.roles.is_none() && self.employee_id.is_none()
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.as_ref().is_some_and(|roles| roles.iter().any(|r| r == role))
    }

    pub fn is_manager(&self) -> bool {
        self.has_role(ROLE_MANAGER)
    }

    pub fn is_user(&self) -> bool {
        self.has_role(ROLE_USER)
    }
}

/// Owned session state: durable store plus the logged-in publisher.
#[derive(Clone, Debug)]
pub struct SessionContext {
    store: CredentialStore,
    publisher: SessionPublisher,
}

impl SessionContext {
    /// Restore from `store`. Partial or corrupt stored state is cleared and
    /// counts as signed out.
    pub fn restore(store: CredentialStore) -> Self {
        let stored = store.load();
        let complete = stored.is_complete();
        if !complete && !stored.is_empty() {
            log::warn!("session: clearing partial stored session");
            store.clear();
        }
        Self { store, publisher: SessionPublisher::new(complete) }
    }

    pub fn is_logged_in(&self) -> bool {
        self.publisher.get()
    }

    /// Snapshot of the stored session; empty when signed out.
    pub fn session(&self) -> Session {
        if !self.is_logged_in() {
            return Session::default();
        }
        let session = self.store.load();
        if session.is_complete() { session } else { Session::default() }
    }

    /// Bearer token for outgoing requests.
    pub fn token(&self) -> Option<String> {
        self.store.token()
    }

    pub fn employee_id(&self) -> Option<i64> {
        self.session().employee_id
    }

    pub fn is_manager(&self) -> bool {
        self.session().is_manager()
    }

    /// Record a successful sign-in. An incomplete session, or one that
    /// cannot be fully stored, is rejected, cleared, and leaves the client
    /// signed out.
    pub fn sign_in(&self, session: &Session) -> bool {
        if !session.is_complete() {
            log::warn!("session: refusing incomplete sign-in response");
            self.logout();
            return false;
        }
        if let Err(e) = self.store.save(session) {
            log::warn!("session: could not store sign-in: {e}");
            self.logout();
            return false;
        }
        self.publisher.set(true);
        log::info!("session: signed in");
        true
    }

    /// Clear stored credentials and publish signed-out. Idempotent.
    pub fn logout(&self) {
        self.store.clear();
        self.publisher.set(false);
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.publisher.subscribe(listener)
    }

    pub fn unsubscribe(&self, subscription: Subscription) {
        self.publisher.unsubscribe(subscription);
    }
}
