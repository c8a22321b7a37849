//! Key-value storage backends for persisted preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme preference is the only value the site persists. It goes through
//! [`KeyValueStorage`] so the theme controller is testable without a browser:
//! [`BrowserStorage`] wraps `window.localStorage` in the `hydrate` build and
//! [`MemoryStorage`] backs tests and server rendering.
//!
//! TRADE-OFFS
//! ==========
//! Reads are infallible from the caller's point of view: an unavailable store
//! reads as "nothing saved". Writes report a [`StorageError`] so callers can
//! log it, but nothing on the page depends on a write succeeding.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Error returned by [`KeyValueStorage::set`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage area exists (SSR, privacy mode, or a non-browser host).
    #[error("storage is unavailable")]
    Unavailable,
    /// The store rejected the write, e.g. because its quota is exhausted.
    #[error("storage write for '{key}' failed: {reason}")]
    Write { key: String, reason: String },
}

pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store is missing or rejects
    /// the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage.set_item(key, value).map_err(|e| StorageError::Write {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

/// In-memory store. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        storage
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
