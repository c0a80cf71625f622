//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an `RwSignal<Session>` context by `SessionProvider` and read by
//! the route gates. Only the session fetch and sign-out mutate it; gates are
//! pure projections.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// The client's view of the signed-in user and whether it is still loading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for Session {
    /// A freshly mounted provider has not heard back from the backend yet.
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl Session {
    /// Settled session with nobody signed in. Also the stand-in when no
    /// provider is mounted above a gate.
    pub fn signed_out() -> Self {
        Self { user: None, loading: false }
    }

    /// Settled session for a fetch result.
    pub fn resolved(user: Option<User>) -> Self {
        Self { user, loading: false }
    }

    /// Mark a refetch in flight while keeping the last known user.
    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    pub fn is_onboarded(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.onboarding_completed)
    }
}
