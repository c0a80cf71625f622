//! Last known signed-in user, persisted under `user-storage`.
//!
//! The loading screen uses it to greet a returning user before the session
//! fetch settles. It never feeds the route gates, which only trust the live
//! session.

#[cfg(test)]
#[path = "user_snapshot_test.rs"]
mod user_snapshot_test;

use serde::{Deserialize, Serialize};

use super::persist::{BrowserStorage, KeyValueStorage, PersistedStore};
use crate::net::types::User;

pub const USER_STORAGE_KEY: &str = "user-storage";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct Snapshot {
    user: Option<User>,
}

#[derive(Clone)]
pub struct UserSnapshotStore<S = BrowserStorage> {
    inner: PersistedStore<Snapshot, S>,
}

impl Default for UserSnapshotStore {
    fn default() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: KeyValueStorage> UserSnapshotStore<S> {
    pub fn new(storage: S) -> Self {
        Self { inner: PersistedStore::new(USER_STORAGE_KEY, storage) }
    }

    pub fn current(&self) -> Option<User> {
        self.inner.load().user
    }

    pub fn remember(&self, user: &User) {
        self.inner.save(&Snapshot { user: Some(user.clone()) });
    }

    pub fn clear(&self) {
        self.inner.clear();
    }
}

/// Name to show for `user`: the profile name, or the email when unset.
pub fn display_name(user: &User) -> &str {
    if user.name.is_empty() { &user.email } else { &user.name }
}
