//! Key-value storage port for the session store.
//!
//! The store never talks to `sessionStorage` directly; it goes through
//! [`KeyValueStorage`] so tests and native builds can substitute an
//! in-memory implementation.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

/// Failure while reading or writing browser storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// `sessionStorage` is disabled or there is no window (native build).
    #[error("session storage is not available")]
    Unavailable,
    /// The storage call itself failed, e.g. quota exceeded.
    #[error("session storage operation failed: {0}")]
    Operation(String),
}

/// Minimal string key-value port over tab-scoped persistent storage.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.sessionStorage` backed implementation.
///
/// A zero-sized handle; the storage object is looked up per call so the
/// type stays `Send + Sync` and can live inside a reactive signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
fn session_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .session_storage()
        .map_err(|e| StorageError::Operation(format!("{:?}", e)))?
        .ok_or(StorageError::Unavailable)
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        session_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Operation(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        session_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Operation(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        session_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Operation(format!("{:?}", e)))
    }
}

/// Native stub - there is no browser storage outside wasm.
#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStorage for BrowserStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

/// In-memory implementation used by tests and native embedders.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("missing"), Ok(None));

        storage.set("key", "value").unwrap();
        assert_eq!(storage.get("key"), Ok(Some("value".to_string())));

        storage.remove("key").unwrap();
        assert_eq!(storage.get("key"), Ok(None));
        assert!(storage.is_empty());
    }

    #[test]
    fn memory_storage_overwrites() {
        let storage = MemoryStorage::new();
        storage.set("key", "first").unwrap();
        storage.set("key", "second").unwrap();
        assert_eq!(storage.get("key"), Ok(Some("second".to_string())));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn remove_is_idempotent() {
        let storage = MemoryStorage::new();
        storage.set("key", "value").unwrap();
        assert!(storage.remove("key").is_ok());
        assert!(storage.remove("key").is_ok());
    }
}
