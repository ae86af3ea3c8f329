use super::*;

fn memory_store() -> (MemoryStorage, CredentialStore) {
    let storage = MemoryStorage::new();
    let store = CredentialStore::new(Arc::new(storage.clone()));
    (storage, store)
}

fn full_session() -> Session {
    Session::signed_in("T", "a@b.com", vec!["USER".to_owned()], 7)
}

/// Storage that rejects every operation with a non-availability error.
struct BrokenStorage;

impl KeyValueStorage for BrokenStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Read { key: key.to_owned() })
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write { key: key.to_owned() })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Err(StorageError::Remove { key: key.to_owned() })
    }
}

#[test]
fn save_writes_all_four_keys() {
    let (storage, store) = memory_store();
    store.save(&full_session()).unwrap();
    assert_eq!(storage.get(TOKEN_KEY).unwrap().as_deref(), Some("T"));
    assert_eq!(storage.get(EMAIL_KEY).unwrap().as_deref(), Some("a@b.com"));
    assert_eq!(storage.get(ROLES_KEY).unwrap().as_deref(), Some("[\"USER\"]"));
    assert_eq!(storage.get(EMPLOYEE_ID_KEY).unwrap().as_deref(), Some("7"));
}

#[test]
fn load_reads_back_saved_session() {
    let (_, store) = memory_store();
    store.save(&full_session()).unwrap();
    assert_eq!(store.load(), full_session());
}

#[test]
fn load_returns_subset_when_partially_stored() {
    let (storage, store) = memory_store();
    storage.set(TOKEN_KEY, "T").unwrap();
    let session = store.load();
    assert_eq!(session.token.as_deref(), Some("T"));
    assert_eq!(session.email, None);
    assert!(!session.is_complete());
}

#[test]
fn corrupt_roles_and_employee_id_read_as_absent() {
    let (storage, store) = memory_store();
    storage.set(ROLES_KEY, "not json").unwrap();
    storage.set(EMPLOYEE_ID_KEY, "seven").unwrap();
    let session = store.load();
    assert_eq!(session.roles, None);
    assert_eq!(session.employee_id, None);
}

#[test]
fn clear_removes_every_key_and_is_idempotent() {
    let (storage, store) = memory_store();
    store.save(&full_session()).unwrap();
    store.clear();
    store.clear();
    for key in ALL_KEYS {
        assert_eq!(storage.get(key).unwrap(), None);
    }
    assert!(store.load().is_empty());
}

#[test]
fn broken_storage_reads_as_empty_and_never_panics() {
    let store = CredentialStore::new(Arc::new(BrokenStorage));
    store.save(&full_session()).unwrap();
    store.clear();
    assert!(store.load().is_empty());
    assert_eq!(store.token(), None);
}

#[test]
fn browser_store_outside_browser_is_empty() {
    let store = CredentialStore::browser();
    store.save(&full_session()).unwrap();
    assert!(store.load().is_empty());
}

#[test]
fn saving_partial_session_removes_stale_fields() {
    let (storage, store) = memory_store();
    store.save(&full_session()).unwrap();
    store.save(&Session { token: Some("U".to_owned()), ..Session::default() }).unwrap();
    assert_eq!(storage.get(TOKEN_KEY).unwrap().as_deref(), Some("U"));
    assert_eq!(storage.get(EMAIL_KEY).unwrap(), None);
}
