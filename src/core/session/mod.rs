//! Session state store.
//!
//! Holds the client-visible copy of "who is logged in" and mirrors it to
//! tab-scoped storage so the session survives a page reload. The record
//! returned by the backend is the only authentication evidence held on
//! the client; correctness of authentication itself lives server-side.

pub mod storage;

use serde::{Deserialize, Serialize};

use self::storage::{KeyValueStorage, StorageError};

/// Storage key for the JSON-serialized user record.
pub const USER_DATA_KEY: &str = "userData";
/// Storage key for the bare username, kept as a cheap correlation id so
/// collaborators don't have to re-parse the full record.
pub const USER_ID_KEY: &str = "userId";

/// The logged-in user as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Session state store over an injected storage port.
///
/// All operations run on the UI thread; there is no interior locking.
/// Storage failures never escape as errors - write operations report
/// success as a boolean, read failures degrade to "logged out".
#[derive(Debug, Clone, Default)]
pub struct SessionStore<S> {
    storage: S,
    current: Option<User>,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            current: None,
        }
    }

    /// Rebuild in-memory state from persisted storage.
    ///
    /// Corrupt persisted data is self-healed: both entries are removed
    /// and the session ends up anonymous. No failure escapes.
    pub fn hydrate(&mut self) {
        self.current = match self.storage.get(USER_DATA_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    leptos::logging::error!("Error loading user from storage: {err}");
                    let _ = self.storage.remove(USER_DATA_KEY);
                    let _ = self.storage.remove(USER_ID_KEY);
                    None
                }
            },
            Ok(None) => None,
            Err(StorageError::Unavailable) => None,
            Err(err) => {
                leptos::logging::error!("Error reading session storage: {err}");
                None
            }
        };
    }

    /// Persist a user record obtained from a successful backend call and
    /// make it current. Returns `false` without touching in-memory state
    /// if the storage write fails.
    pub fn login(&mut self, user: User) -> bool {
        let raw = match serde_json::to_string(&user) {
            Ok(raw) => raw,
            Err(err) => {
                leptos::logging::error!("Error saving user data: {err}");
                return false;
            }
        };

        if let Err(err) = self
            .storage
            .set(USER_DATA_KEY, &raw)
            .and_then(|_| self.storage.set(USER_ID_KEY, &user.username))
        {
            leptos::logging::error!("Error saving user data: {err}");
            return false;
        }

        self.current = Some(user);
        true
    }

    /// Clear the session. In-memory state is always cleared; the return
    /// value only reports whether the storage entries were removed
    /// (session storage is best-effort). Idempotent.
    pub fn logout(&mut self) -> bool {
        let data_removed = self.storage.remove(USER_DATA_KEY);
        let id_removed = self.storage.remove(USER_ID_KEY);
        self.current = None;

        if let Err(err) = data_removed.as_ref().and(id_removed.as_ref()) {
            leptos::logging::error!("Error during logout: {err}");
        }
        data_removed.is_ok() && id_removed.is_ok()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Username of the current user, the client-side correlation id.
    pub fn user_id(&self) -> Option<&str> {
        self.current.as_ref().map(|user| user.username.as_str())
    }

    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::storage::{KeyValueStorage, MemoryStorage, StorageError};
    use super::*;

    fn alice() -> User {
        User {
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            full_name: Some("Alice Aguilar".to_string()),
        }
    }

    /// Storage whose writes and/or deletes fail, for the quota-exceeded
    /// and disabled-storage paths.
    struct FlakyStorage {
        inner: MemoryStorage,
        fail_writes: bool,
        fail_removes: bool,
    }

    impl FlakyStorage {
        fn failing_writes() -> Self {
            Self {
                inner: MemoryStorage::new(),
                fail_writes: true,
                fail_removes: false,
            }
        }

        fn failing_removes() -> Self {
            Self {
                inner: MemoryStorage::new(),
                fail_writes: false,
                fail_removes: true,
            }
        }
    }

    impl KeyValueStorage for FlakyStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::Operation("quota exceeded".to_string()));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            if self.fail_removes {
                return Err(StorageError::Operation("storage disabled".to_string()));
            }
            self.inner.remove(key)
        }
    }

    #[test]
    fn hydrate_with_valid_data() {
        let storage = MemoryStorage::new();
        storage
            .set(USER_DATA_KEY, &serde_json::to_string(&alice()).unwrap())
            .unwrap();
        storage.set(USER_ID_KEY, "alice").unwrap();

        let mut store = SessionStore::new(storage);
        store.hydrate();

        assert_eq!(store.current(), Some(&alice()));
        assert!(store.is_authenticated());
    }

    #[test]
    fn hydrate_with_empty_storage() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.hydrate();

        assert!(store.current().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn hydrate_with_corrupt_data_self_heals() {
        let storage = MemoryStorage::new();
        storage.set(USER_DATA_KEY, "{not json").unwrap();
        storage.set(USER_ID_KEY, "alice").unwrap();

        let mut store = SessionStore::new(storage);
        store.hydrate();

        assert!(store.current().is_none());
        assert_eq!(store.storage().get(USER_DATA_KEY), Ok(None));
        assert_eq!(store.storage().get(USER_ID_KEY), Ok(None));
    }

    #[test]
    fn login_sets_state_and_both_keys() {
        let mut store = SessionStore::new(MemoryStorage::new());

        assert!(store.login(alice()));
        assert!(store.is_authenticated());
        assert_eq!(store.user_id(), Some("alice"));

        let raw = store.storage().get(USER_DATA_KEY).unwrap().unwrap();
        assert_eq!(serde_json::from_str::<User>(&raw).unwrap(), alice());
        assert_eq!(
            store.storage().get(USER_ID_KEY).unwrap(),
            Some("alice".to_string())
        );
    }

    #[test]
    fn login_write_failure_leaves_state_untouched() {
        let mut store = SessionStore::new(FlakyStorage::failing_writes());

        assert!(!store.login(alice()));
        assert!(!store.is_authenticated());
        assert_eq!(store.user_id(), None);
        assert!(store.storage().inner.is_empty());
    }

    #[test]
    fn logout_clears_state_and_storage() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.login(alice());

        assert!(store.logout());
        assert!(!store.is_authenticated());
        assert!(store.current().is_none());
        assert_eq!(store.storage().get(USER_DATA_KEY), Ok(None));
        assert_eq!(store.storage().get(USER_ID_KEY), Ok(None));
    }

    #[test]
    fn logout_is_idempotent() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.login(alice());

        assert!(store.logout());
        assert!(store.logout());
        assert!(store.current().is_none());
        assert!(store.storage().is_empty());
    }

    #[test]
    fn logout_clears_memory_even_when_storage_fails() {
        let mut store = SessionStore::new(FlakyStorage::failing_removes());
        store.login(alice());

        assert!(!store.logout());
        assert!(!store.is_authenticated());
        assert!(store.current().is_none());
    }

    #[test]
    fn login_then_rehydrate_round_trips() {
        let user = User {
            username: "bruno".to_string(),
            email: "bruno@ejemplo.com".to_string(),
            full_name: None,
        };

        let mut store = SessionStore::new(MemoryStorage::new());
        assert!(store.login(user.clone()));

        // Simulate a page reload: a fresh store over the same storage.
        let mut reloaded = SessionStore::new(store.into_storage());
        reloaded.hydrate();

        assert_eq!(reloaded.current(), Some(&user));
        assert_eq!(reloaded.user_id(), Some("bruno"));
    }

    #[test]
    fn user_id_is_absent_when_anonymous() {
        let store = SessionStore::new(MemoryStorage::new());
        assert_eq!(store.user_id(), None);
    }
}
