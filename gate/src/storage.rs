//! Per-tab key-value storage backends.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session fields persist in `window.sessionStorage` so they survive a reload
//! within one tab but are never shared across tabs.
//!
//! TRADE-OFFS
//! ==========
//! [`BrowserStorage`] looks the storage object up on every call instead of
//! holding a JS handle. That keeps it `Send + Sync` so session stores can live
//! inside reactive signals. Without the `browser` feature it reports
//! [`StorageError::Unavailable`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::BTreeMap;

/// Storage access failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage object is reachable (no window, storage disabled, non-browser build).
    #[error("session storage unavailable")]
    Unavailable,

    /// The browser rejected the operation (quota exceeded, security error).
    #[error("session storage error: {0}")]
    Js(String),
}

/// String-keyed, string-valued storage.
pub trait SessionStorage {
    /// Read `key`. A missing key is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// [`StorageError`] when the backend cannot be read at all.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// [`StorageError`] when the write is rejected.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// [`StorageError`] when the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage for tests and non-browser builds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }
}

/// `window.sessionStorage`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStorage;

#[cfg(feature = "browser")]
impl BrowserStorage {
    fn handle() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window.session_storage().map_err(js_error)?.ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "browser")]
fn js_error(value: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

#[cfg(feature = "browser")]
impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::handle()?.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::handle()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        Self::handle()?.remove_item(key).map_err(js_error)
    }
}

#[cfg(not(feature = "browser"))]
impl SessionStorage for BrowserStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}
