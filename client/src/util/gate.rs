//! Route-gate decision table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both route gates (public landing, protected dashboard) make the same kind of
//! decision over the same session state. This module holds that decision as a
//! pure function parameterized by a [`GatePolicy`]; the Leptos components in
//! `components::gate` only render or navigate according to its answer.
//!
//! A gate never owns state. Session transitions come from the session
//! provider; the gate projects the current value onto an [`Access`] level and
//! looks up the policy's action for it.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::state::session::Session;

pub const LOGIN_ROUTE: &str = "/login";
pub const DASHBOARD_ROUTE: &str = "/dashboard";
/// First onboarding step. Incomplete users always restart here.
pub const ONBOARDING_START_ROUTE: &str = "/onboarding/company-setup";

/// Session projected onto the four states the gates distinguish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Loading,
    Unauthenticated,
    AuthenticatedIncomplete,
    AuthenticatedComplete,
}

impl Access {
    /// `None` means no session provider is mounted; that degrades to a settled
    /// anonymous session.
    pub fn of(session: Option<&Session>) -> Self {
        let Some(session) = session else {
            return Self::Unauthenticated;
        };
        if session.loading {
            return Self::Loading;
        }
        match &session.user {
            None => Self::Unauthenticated,
            Some(_) if session.is_onboarded() => Self::AuthenticatedComplete,
            Some(_) => Self::AuthenticatedIncomplete,
        }
    }
}

/// What a gate does for one settled access level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateAction {
    Render,
    Redirect {
        to: &'static str,
        /// Record the current location so the target can send the user back.
        remember_location: bool,
    },
}

/// Per-gate actions for each settled access level. Loading is not
/// configurable: every gate waits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GatePolicy {
    pub on_unauthenticated: GateAction,
    pub on_incomplete: GateAction,
    pub on_complete: GateAction,
}

/// Public landing pages: anyone may look, onboarded users go to work.
///
/// Incomplete users are let through so they can leave onboarding and come
/// back to it later.
pub const LANDING: GatePolicy = GatePolicy {
    on_unauthenticated: GateAction::Render,
    on_incomplete: GateAction::Render,
    on_complete: GateAction::Redirect { to: DASHBOARD_ROUTE, remember_location: false },
};

/// Protected dashboard pages.
pub const DASHBOARD: GatePolicy = GatePolicy {
    on_unauthenticated: GateAction::Redirect { to: LOGIN_ROUTE, remember_location: true },
    on_incomplete: GateAction::Redirect { to: ONBOARDING_START_ROUTE, remember_location: false },
    on_complete: GateAction::Render,
};

/// A navigation the gate wants performed. Gate redirects always replace the
/// current history entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectTarget {
    pub to: &'static str,
    /// Location the user attempted, when the policy asks to remember it.
    pub from: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Session still loading; show a neutral placeholder and do not navigate.
    Loading,
    Render,
    Redirect(RedirectTarget),
}

/// Decide what a gate with `policy` does for `session` at `location`.
pub fn decide(policy: &GatePolicy, session: Option<&Session>, location: &str) -> GateDecision {
    let action = match Access::of(session) {
        Access::Loading => return GateDecision::Loading,
        Access::Unauthenticated => policy.on_unauthenticated,
        Access::AuthenticatedIncomplete => policy.on_incomplete,
        Access::AuthenticatedComplete => policy.on_complete,
    };
    match action {
        GateAction::Render => GateDecision::Render,
        GateAction::Redirect { to, remember_location } => GateDecision::Redirect(RedirectTarget {
            to,
            from: remember_location.then(|| location.to_owned()),
        }),
    }
}
