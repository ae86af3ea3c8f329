use std::sync::{Arc, Mutex};

use super::*;
use crate::state::credential_store::{EMAIL_KEY, KeyValueStorage, MemoryStorage, StorageError, TOKEN_KEY};

fn context_over(storage: &MemoryStorage) -> SessionContext {
    SessionContext::restore(CredentialStore::new(Arc::new(storage.clone())))
}

/// Memory storage that refuses writes to one key, like a full quota.
struct FailingWrites {
    inner: MemoryStorage,
    key: &'static str,
}

impl KeyValueStorage for FailingWrites {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == self.key {
            return Err(StorageError::Write { key: key.to_owned() });
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

fn sample() -> Session {
    Session::signed_in("T", "a@b.com", vec!["USER".to_owned()], 7)
}

#[test]
fn empty_storage_restores_signed_out() {
    let storage = MemoryStorage::new();
    let ctx = context_over(&storage);
    assert!(!ctx.is_logged_in());
    assert_eq!(ctx.session(), Session::default());
}

#[test]
fn sign_in_then_reload_preserves_logged_in() {
    let storage = MemoryStorage::new();
    let ctx = context_over(&storage);
    assert!(ctx.sign_in(&sample()));
    let before = ctx.is_logged_in();

    let reloaded = context_over(&storage);
    assert_eq!(reloaded.is_logged_in(), before);
    assert_eq!(reloaded.employee_id(), Some(7));
    assert_eq!(reloaded.token().as_deref(), Some("T"));
}

#[test]
fn partial_stored_session_is_cleared_on_restore() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "T").unwrap();
    let ctx = context_over(&storage);
    assert!(!ctx.is_logged_in());
    assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
}

#[test]
fn incomplete_sign_in_is_rejected_and_cleared() {
    let storage = MemoryStorage::new();
    let ctx = context_over(&storage);
    let partial = Session { token: Some("T".to_owned()), ..Session::default() };
    assert!(!ctx.sign_in(&partial));
    assert!(!ctx.is_logged_in());
    assert_eq!(ctx.token(), None);
}

#[test]
fn logout_twice_matches_logout_once() {
    let storage = MemoryStorage::new();
    let ctx = context_over(&storage);
    ctx.sign_in(&sample());
    ctx.logout();
    let once = (ctx.is_logged_in(), ctx.session());
    ctx.logout();
    assert_eq!((ctx.is_logged_in(), ctx.session()), once);
    assert_eq!(once, (false, Session::default()));
}

#[test]
fn subscribers_see_sign_in_and_logout() {
    let storage = MemoryStorage::new();
    let ctx = context_over(&storage);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    ctx.subscribe(move |v| sink.lock().unwrap().push(v));
    ctx.sign_in(&sample());
    ctx.logout();
    assert_eq!(*seen.lock().unwrap(), vec![false, true, false]);
}

#[test]
fn role_helpers_check_membership() {
    let manager = Session::signed_in("T", "m@b.com", vec![ROLE_USER.to_owned(), ROLE_MANAGER.to_owned()], 1);
    assert!(manager.is_manager());
    assert!(manager.is_user());
    assert!(!sample().is_manager());
    assert!(!Session::default().has_role(ROLE_USER));
}

#[test]
fn sign_in_that_cannot_be_stored_leaves_client_signed_out() {
    let storage = MemoryStorage::new();
    let failing = FailingWrites { inner: storage.clone(), key: EMAIL_KEY };
    let ctx = SessionContext::restore(CredentialStore::new(Arc::new(failing)));

    assert!(!ctx.sign_in(&sample()));
    assert!(!ctx.is_logged_in());
    assert_eq!(ctx.session(), Session::default());
    assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);

    let reloaded = context_over(&storage);
    assert_eq!(reloaded.is_logged_in(), ctx.is_logged_in());
}

#[test]
fn sign_in_with_empty_email_is_rejected_and_survives_reload() {
    let storage = MemoryStorage::new();
    let ctx = context_over(&storage);

    assert!(!ctx.sign_in(&Session::signed_in("T", "", vec!["USER".to_owned()], 7)));
    assert!(!ctx.is_logged_in());

    let reloaded = context_over(&storage);
    assert_eq!(reloaded.is_logged_in(), ctx.is_logged_in());
}
