//! # Key-value storage: the browser-local cache layer
//!
//! Session, wishlist, recently viewed services and font preferences are all
//! small JSON documents mirrored into `window.localStorage`. The
//! [`KeyValueStore`] trait hides where they live so the same code runs against
//! [`crate::MemoryStore`] in tests and native builds and against
//! `crate::LocalStorage` in the browser.
//!
//! Writes report a [`StorageError`]; the cache helpers log it with `tracing`
//! and carry on, so a full or disabled storage behaves like an empty one. A
//! corrupt value reads as absent. The backend is always the authoritative
//! copy.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("could not encode {key}: {reason}")]
    Encode { key: String, reason: String },
    #[error("could not write {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Read and decode a JSON value. Missing or undecodable entries yield `None`.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    serde_json::from_str(&raw).ok()
}

/// Encode and write a JSON value.
pub fn save_json<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Encode {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    store.set(key, &raw)
}

/// [`save_json`] for caches: a failed write is logged and otherwise ignored.
pub fn persist<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) {
    if let Err(e) = save_json(store, key, value) {
        tracing::warn!("{e}");
    }
}

/// Remove a cache entry, logging a failure.
pub fn forget(store: &impl KeyValueStore, key: &str) {
    if let Err(e) = store.remove(key) {
        tracing::warn!("{e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn corrupt_json_reads_as_absent() {
        let store = MemoryStore::new();
        store.set("k", "{not json").unwrap();
        assert_eq!(load_json::<Vec<u32>>(&store, "k"), None);
    }

    #[test]
    fn json_helpers_roundtrip() {
        let store = MemoryStore::new();
        save_json(&store, "k", &vec![1u32, 2, 3]).unwrap();
        assert_eq!(load_json::<Vec<u32>>(&store, "k"), Some(vec![1, 2, 3]));
        store.remove("k").unwrap();
        assert_eq!(load_json::<Vec<u32>>(&store, "k"), None);
    }

    /// Storage whose quota is used up.
    struct FullStore;

    impl KeyValueStore for FullStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            })
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn write_failures_are_reported() {
        let err = save_json(&FullStore, "bridal.session", &"tok").unwrap_err();
        assert_eq!(err.to_string(), "could not write bridal.session: QuotaExceededError");
        // the cache helpers log and carry on
        persist(&FullStore, "bridal.session", &"tok");
        forget(&FullStore, "bridal.session");
    }
}
