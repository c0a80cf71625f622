//! Company settings cached client-side per signed-in user.
//!
//! The cache remembers which user it was filled for; reads for any other user
//! miss so a shared device never shows another account's company.

#[cfg(test)]
#[path = "company_test.rs"]
mod company_test;

use serde::{Deserialize, Serialize};

use super::persist::{BrowserStorage, KeyValueStorage, PersistedStore};
use crate::net::types::CompanySettings;

pub const COMPANY_SETTINGS_STORAGE_KEY: &str = "company-settings-storage";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CachedSettings {
    user_id: Option<String>,
    settings: Option<CompanySettings>,
}

#[derive(Clone)]
pub struct CompanySettingsCache<S = BrowserStorage> {
    inner: PersistedStore<CachedSettings, S>,
}

impl Default for CompanySettingsCache {
    fn default() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: KeyValueStorage> CompanySettingsCache<S> {
    pub fn new(storage: S) -> Self {
        Self { inner: PersistedStore::new(COMPANY_SETTINGS_STORAGE_KEY, storage) }
    }

    /// Cached settings for `user_id`, if this cache was filled for that user.
    pub fn get(&self, user_id: &str) -> Option<CompanySettings> {
        let cached = self.inner.load();
        if cached.user_id.as_deref() == Some(user_id) { cached.settings } else { None }
    }

    /// Replace the cache with freshly fetched settings.
    pub fn store(&self, user_id: &str, settings: CompanySettings) {
        self.inner.save(&CachedSettings { user_id: Some(user_id.to_owned()), settings: Some(settings) });
    }

    pub fn clear(&self) {
        self.inner.clear();
    }
}
