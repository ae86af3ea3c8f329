use super::*;

#[test]
fn logged_in_is_allowed() {
    assert_eq!(guard(true), GuardDecision::Allow);
}

#[test]
fn missing_session_redirects_to_sign_in() {
    assert_eq!(guard(false), GuardDecision::Redirect("/signin_signup"));
}

#[test]
fn guarded_route_without_token_redirects() {
    use std::sync::Arc;

    use crate::state::credential_store::{CredentialStore, MemoryStorage};
    use crate::state::session::SessionContext;

    let session = SessionContext::restore(CredentialStore::new(Arc::new(MemoryStorage::new())));
    assert_eq!(session.token(), None);
    assert_eq!(guard(session.is_logged_in()), GuardDecision::Redirect(SIGN_IN_PATH));
}

#[test]
fn guard_does_not_mutate_session() {
    use std::sync::Arc;

    use crate::state::credential_store::{CredentialStore, MemoryStorage};
    use crate::state::session::{Session, SessionContext};

    let session = SessionContext::restore(CredentialStore::new(Arc::new(MemoryStorage::new())));
    session.sign_in(&Session::signed_in("T", "a@b.com", vec!["USER".to_owned()], 7));
    let _ = guard(session.is_logged_in());
    assert_eq!(session.token().as_deref(), Some("T"));
}

#[test]
fn placeholder_depends_on_hydration() {
    assert_eq!(placeholder_text(false), "Loading...");
    assert_eq!(placeholder_text(true), "Redirecting to sign in...");
}
