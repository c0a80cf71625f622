//! Device-persisted JSON stores.
//!
//! SYSTEM CONTEXT
//! ==============
//! Small client stores (biometric flag, user snapshot, company settings) are
//! written through to `localStorage` on every change so they survive reloads.
//! Each value is wrapped in a `{ "state": ... }` envelope under a namespaced,
//! versionless key.
//!
//! DESIGN
//! ======
//! Stores are generic over [`KeyValueStorage`] so the same code runs against
//! the browser in `hydrate` builds and against [`MemoryStorage`] in native
//! tests. Writes are fire-and-forget: a failed write is logged and dropped,
//! and the last successful write wins.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, PoisonError};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend exists in this environment (SSR, private mode).
    #[error("storage unavailable")]
    Unavailable,
    /// The backend rejected the operation (quota, security error).
    #[error("storage operation failed: {0}")]
    Backend(String),
}

/// Minimal string key-value backend.
pub trait KeyValueStorage {
    /// Read the raw value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write the raw value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend rejects the delete.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage`. Looked up per call so the handle stays `Send`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn js_error(err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Backend(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(js_error)
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
            local_storage()?.set_item(key, value).map_err(js_error)
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
            local_storage()?.remove_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// In-process storage. Clones share the same map, which lets tests model a
/// process restart by building a fresh store over a clone.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    state: &'a T,
}

#[derive(Deserialize)]
struct Envelope<T> {
    state: T,
}

/// A typed value persisted as JSON under a fixed key.
pub struct PersistedStore<T, S = BrowserStorage> {
    key: &'static str,
    storage: S,
    _value: PhantomData<fn() -> T>,
}

impl<T, S: Clone> Clone for PersistedStore<T, S> {
    fn clone(&self) -> Self {
        Self { key: self.key, storage: self.storage.clone(), _value: PhantomData }
    }
}

impl<T, S> PersistedStore<T, S>
where
    T: Serialize + DeserializeOwned + Default,
    S: KeyValueStorage,
{
    pub fn new(key: &'static str, storage: S) -> Self {
        Self { key, storage, _value: PhantomData }
    }

    /// Read the stored value. Missing, unreadable, or corrupt entries read as
    /// `T::default()`.
    pub fn load(&self) -> T {
        let raw = match self.storage.get(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) | Err(StorageError::Unavailable) => return T::default(),
            Err(e) => {
                log::warn!("persisted store {}: read failed: {e}", self.key);
                return T::default();
            }
        };
        match serde_json::from_str::<Envelope<T>>(&raw) {
            Ok(envelope) => envelope.state,
            Err(e) => {
                log::warn!("persisted store {}: discarding corrupt value: {e}", self.key);
                T::default()
            }
        }
    }

    /// Write `value` through to storage.
    pub fn save(&self, value: &T) {
        let raw = match serde_json::to_string(&EnvelopeRef { state: value }) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("persisted store {}: encode failed: {e}", self.key);
                return;
            }
        };
        if let Err(e) = self.storage.set(self.key, &raw) {
            log::warn!("persisted store {}: write failed: {e}", self.key);
        }
    }

    /// Drop the stored value entirely.
    pub fn clear(&self) {
        if let Err(e) = self.storage.remove(self.key) {
            log::warn!("persisted store {}: clear failed: {e}", self.key);
        }
    }
}
