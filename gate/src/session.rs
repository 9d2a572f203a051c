//! Session store backed by per-tab storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login and scan pages establish a session after a successful exchange with
//! the backend; the navigation guard reads presence on every transition;
//! logout clears it. The store is an explicit object owned by the app root,
//! never an ambient global.
//!
//! DESIGN
//! ======
//! The in-memory record mirrors storage. [`SessionRecord`] describes one
//! record layout: which keys it occupies, how it rebuilds from stored values,
//! and which fields are mandatory for presence.
//!
//! ERROR HANDLING
//! ==============
//! A read failure leaves the affected field empty, so presence stays false and
//! the guard keeps working. The failure is logged and retained in
//! [`SessionStore::storage_error`] so callers can tell "logged out" apart from
//! "storage unavailable". Write failures propagate to the caller; the
//! in-memory record has already been updated at that point.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::storage::{SessionStorage, StorageError};

/// Layout of one session record in storage.
pub trait SessionRecord: Clone + Default {
    /// Every key the record may occupy, optional ones included.
    const KEYS: &'static [&'static str];

    /// Keys left behind by superseded layouts. Swept on clear.
    const RETIRED_KEYS: &'static [&'static str] = &[];

    /// Rebuild a record from storage. `read` yields `None` for absent keys.
    fn from_storage(read: impl FnMut(&'static str) -> Option<String>) -> Self;

    /// Key/value pairs to persist. Unset optional fields are omitted.
    fn to_storage(&self) -> Vec<(&'static str, &str)>;

    /// True iff every mandatory field is non-empty.
    fn is_complete(&self) -> bool;
}

/// In-memory session record mirrored to a storage backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStore<R, S> {
    record: R,
    storage: S,
    storage_error: Option<StorageError>,
}

impl<R: SessionRecord, S: SessionStorage> SessionStore<R, S> {
    /// Build a store from whatever `storage` currently holds.
    pub fn open(storage: S) -> Self {
        let mut store = Self { record: R::default(), storage, storage_error: None };
        store.reload();
        store
    }

    /// Re-read the record from storage.
    pub fn reload(&mut self) {
        let mut failure = None;
        let storage = &self.storage;
        self.record = R::from_storage(|key| match storage.get(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("session storage read failed for {key}: {e}");
                failure.get_or_insert(e);
                None
            }
        });
        self.storage_error = failure;
    }

    /// Derived presence: the record is complete.
    pub fn is_present(&self) -> bool {
        self.record.is_complete()
    }

    pub fn record(&self) -> &R {
        &self.record
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Last storage failure seen by a read or write, if any.
    pub fn storage_error(&self) -> Option<&StorageError> {
        self.storage_error.as_ref()
    }

    /// Replace the session with `record` and persist every field.
    ///
    /// Optional fields absent from `record` have their keys removed so a
    /// reload reproduces exactly this record.
    ///
    /// # Errors
    ///
    /// The first [`StorageError`] hit while writing. The in-memory record is
    /// already replaced.
    pub fn establish(&mut self, record: R) -> Result<(), StorageError> {
        self.record = record;
        let entries = self.record.to_storage();
        let mut result = Ok(());
        for key in R::KEYS {
            let outcome = match entries.iter().find(|(k, _)| k == key) {
                Some((_, value)) => self.storage.set(key, value),
                None => self.storage.remove(key),
            };
            if let Err(e) = outcome {
                result = Err(e);
                break;
            }
        }
        log::debug!("session established (present={})", self.record.is_complete());
        self.finish(result)
    }

    /// Drop the session and remove every key it may occupy.
    ///
    /// Removal continues past failures so no key is skipped.
    ///
    /// # Errors
    ///
    /// The first [`StorageError`] hit while removing.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.record = R::default();
        let mut result = Ok(());
        for key in R::KEYS.iter().chain(R::RETIRED_KEYS) {
            if let Err(e) = self.storage.remove(key) {
                if result.is_ok() {
                    result = Err(e);
                }
            }
        }
        log::debug!("session cleared");
        self.finish(result)
    }

    fn finish(&mut self, result: Result<(), StorageError>) -> Result<(), StorageError> {
        match &result {
            Ok(()) => self.storage_error = None,
            Err(e) => {
                log::warn!("session storage write failed: {e}");
                self.storage_error = Some(e.clone());
            }
        }
        result
    }
}
