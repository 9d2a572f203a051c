//! Leptos bindings: the reactive session handle provided through context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each app root opens one [`SessionContext`] and provides it. The guarded
//! outlet takes [`SessionContext::presence`] as its presence signal; login
//! and logout pages call [`SessionContext::establish`] and
//! [`SessionContext::clear`], which notify that signal.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use leptos::prelude::*;

use crate::session::{SessionRecord, SessionStore};
use crate::storage::{BrowserStorage, SessionStorage, StorageError};

/// `Copy` handle over a [`SessionStore`] held in a signal.
pub struct SessionContext<R, S = BrowserStorage> {
    store: RwSignal<SessionStore<R, S>>,
}

impl<R, S> Clone for SessionContext<R, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, S> Copy for SessionContext<R, S> {}

impl<R> SessionContext<R, BrowserStorage>
where
    R: SessionRecord + Send + Sync + 'static,
{
    /// Read whatever session the tab already holds.
    pub fn open() -> Self {
        Self::open_with(BrowserStorage)
    }
}

impl<R, S> SessionContext<R, S>
where
    R: SessionRecord + Send + Sync + 'static,
    S: SessionStorage + Send + Sync + 'static,
{
    pub fn open_with(storage: S) -> Self {
        Self { store: RwSignal::new(SessionStore::open(storage)) }
    }

    pub fn is_present(self) -> bool {
        self.store.with(SessionStore::is_present)
    }

    /// Presence as a signal, recomputed whenever the session changes.
    pub fn presence(self) -> Signal<bool> {
        Signal::derive(move || self.is_present())
    }

    /// The current record, if complete.
    pub fn current(self) -> Option<R> {
        self.store.with(|s| s.is_present().then(|| s.record().clone()))
    }

    /// Read the in-memory record, complete or not.
    pub fn with_record<T>(self, f: impl FnOnce(&R) -> T) -> T {
        self.store.with(|s| f(s.record()))
    }

    pub fn storage_error(self) -> Option<StorageError> {
        self.store.with(|s| s.storage_error().cloned())
    }

    /// # Errors
    ///
    /// [`StorageError`] if a field could not be persisted, or
    /// [`StorageError::Unavailable`] once the owning reactive scope is gone.
    pub fn establish(self, record: R) -> Result<(), StorageError> {
        self.store.try_update(|s| s.establish(record)).unwrap_or(Err(StorageError::Unavailable))
    }

    /// # Errors
    ///
    /// [`StorageError`] if a key could not be removed, or
    /// [`StorageError::Unavailable`] once the owning reactive scope is gone.
    pub fn clear(self) -> Result<(), StorageError> {
        self.store.try_update(SessionStore::clear).unwrap_or(Err(StorageError::Unavailable))
    }
}
