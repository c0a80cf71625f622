//! Persisted "biometric setup complete" flag.
//!
//! Stored on-device under `biometric-storage`. Only explicit setup and reset
//! actions mutate it; there is no remote sync.

#[cfg(test)]
#[path = "biometric_test.rs"]
mod biometric_test;

use serde::{Deserialize, Serialize};

use super::persist::{BrowserStorage, KeyValueStorage, PersistedStore};

pub const BIOMETRIC_STORAGE_KEY: &str = "biometric-storage";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BiometricSetup {
    pub is_biometric_setup_complete: bool,
}

#[derive(Clone)]
pub struct BiometricStore<S = BrowserStorage> {
    inner: PersistedStore<BiometricSetup, S>,
}

impl Default for BiometricStore {
    fn default() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: KeyValueStorage> BiometricStore<S> {
    pub fn new(storage: S) -> Self {
        Self { inner: PersistedStore::new(BIOMETRIC_STORAGE_KEY, storage) }
    }

    pub fn is_complete(&self) -> bool {
        self.inner.load().is_biometric_setup_complete
    }

    /// Record the flag; written through immediately.
    pub fn set_complete(&self, complete: bool) {
        self.inner.save(&BiometricSetup { is_biometric_setup_complete: complete });
    }

    pub fn reset(&self) {
        self.set_complete(false);
    }
}
