//! # `window.localStorage` store: browser-side persistence
//!
//! [`LocalStorage`] is the [`KeyValueStore`] used on the web platform. It is a
//! zero-size handle that looks up `window.localStorage` on every call; the
//! lookup is cheap and avoids holding a `web_sys::Storage` across await points.
//!
//! Writes that throw (quota exceeded, some private browsing modes) come back
//! as [`StorageError::Write`] with the browser's message.

use crate::kv::{KeyValueStore, StorageError};

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| write_error(key, e))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage.remove_item(key).map_err(|e| write_error(key, e))
    }
}

fn write_error(key: &str, err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Write {
        key: key.to_string(),
        reason: format!("{err:?}"),
    }
}
