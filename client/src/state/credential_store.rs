//! Durable persistence of the signed-in session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Four `localStorage` keys survive page reloads: bearer token, email, role
//! list (JSON array) and employee id. Outside the browser the store reads as
//! empty and writes are dropped.
//!
//! ERROR HANDLING
//! ==============
//! Read and clear failures are logged and read back as "no stored session",
//! so a broken storage area degrades to a signed-out client. A failed save is
//! returned to the caller, which must not treat the session as stored.

#[cfg(test)]
#[path = "credential_store_test.rs"]
mod credential_store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::session::Session;

pub const TOKEN_KEY: &str = "jwtToken";
pub const EMAIL_KEY: &str = "userEmail";
pub const ROLES_KEY: &str = "userRoles";
pub const EMPLOYEE_ID_KEY: &str = "employeeId";

const ALL_KEYS: [&str; 4] = [TOKEN_KEY, EMAIL_KEY, ROLES_KEY, EMPLOYEE_ID_KEY];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage read failed for {key}")]
    Read { key: String },
    #[error("storage write failed for {key}")]
    Write { key: String },
    #[error("storage remove failed for {key}")]
    Remove { key: String },
    #[error("could not serialize {key}: {message}")]
    Serialize { key: String, message: String },
}

/// Minimal string key-value storage used by [`CredentialStore`].
pub trait KeyValueStorage: Send + Sync {
    /// Read `key`, returning `Ok(None)` when it is not set.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the write is rejected (quota, privacy mode, ...).
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying storage cannot be modified.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, or nothing at all outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|_| StorageError::Read { key: key.to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|_| StorageError::Write { key: key.to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|_| StorageError::Remove { key: key.to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// In-memory storage. Clones share the same map, which lets tests model a
/// page reload by building a second store over the same backing storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entries<R>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> R) -> R {
        let mut guard = self.entries.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&mut guard)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.with_entries(|m| m.get(key).cloned()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.with_entries(|m| m.insert(key.to_owned(), value.to_owned()));
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.with_entries(|m| m.remove(key));
        Ok(())
    }
}

/// Session persistence over a [`KeyValueStorage`] backend.
#[derive(Clone)]
pub struct CredentialStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore").finish_non_exhaustive()
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::browser()
    }
}

impl CredentialStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Store backed by `window.localStorage`.
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserStorage))
    }

    /// Persist every present field of `session`.
    ///
    /// Absent fields are removed so storage never holds a mix of an old and a
    /// new session.
    ///
    /// # Errors
    ///
    /// Returns the first failed write. Storage may then hold part of the
    /// session; callers clear it.
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        self.write_opt(TOKEN_KEY, session.token.as_deref())?;
        self.write_opt(EMAIL_KEY, session.email.as_deref())?;
        let roles = session
            .roles
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| StorageError::Serialize { key: ROLES_KEY.to_owned(), message: e.to_string() })?;
        self.write_opt(ROLES_KEY, roles.as_deref())?;
        let employee_id = session.employee_id.map(|id| id.to_string());
        self.write_opt(EMPLOYEE_ID_KEY, employee_id.as_deref())
    }

    fn write_opt(&self, key: &str, value: Option<&str>) -> Result<(), StorageError> {
        match value {
            Some(v) => self.storage.set(key, v),
            None => self.storage.remove(key),
        }
    }

    /// Read back whatever subset of the session is stored.
    pub fn load(&self) -> Session {
        Session {
            token: self.read(TOKEN_KEY),
            email: self.read(EMAIL_KEY),
            roles: self.read(ROLES_KEY).and_then(|raw| parse_roles(&raw)),
            employee_id: self.read(EMPLOYEE_ID_KEY).and_then(|raw| parse_employee_id(&raw)),
        }
    }

    /// Stored bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.read(TOKEN_KEY)
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(StorageError::Unavailable) => None,
            Err(e) => {
                log::warn!("credential store: {e}");
                None
            }
        }
    }

    /// Remove all session keys. Safe to call repeatedly.
    pub fn clear(&self) {
        for key in ALL_KEYS {
            match self.storage.remove(key) {
                Ok(()) | Err(StorageError::Unavailable) => {}
                Err(e) => log::warn!("credential store: clear failed: {e}"),
            }
        }
    }
}

fn parse_roles(raw: &str) -> Option<Vec<String>> {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(roles) => Some(roles),
        Err(e) => {
            log::warn!("credential store: discarding corrupt role list: {e}");
            None
        }
    }
}

fn parse_employee_id(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(id) => Some(id),
        Err(_) => {
            log::warn!("credential store: discarding corrupt employee id {raw:?}");
            None
        }
    }
}
