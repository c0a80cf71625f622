//! Session provider and the actions that mutate the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once near the root. It owns the `RwSignal<Session>` context that the
//! route gates read, starts in the loading state, and resolves it from
//! `/api/auth/me` after hydration.

#[cfg(test)]
#[path = "session_provider_test.rs"]
mod session_provider_test;

use leptos::prelude::*;

use crate::net::api::{self, ApiFailure};
use crate::pages::rate_limited::failure_route;
use crate::state::company::CompanySettingsCache;
use crate::state::persist::KeyValueStorage;
use crate::state::session::Session;
use crate::state::user_snapshot::UserSnapshotStore;

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(Session::default());
    provide_context(session);

    let snapshot = use_context::<UserSnapshotStore>().unwrap_or_default();
    // Effects only run in the browser, so SSR renders the loading state.
    Effect::new(move || {
        let snapshot = snapshot.clone();
        leptos::task::spawn_local(refresh_session(session, snapshot));
    });

    children()
}

/// The session context, or a settled signed-out session when no provider is
/// mounted.
pub fn use_session() -> RwSignal<Session> {
    use_context::<RwSignal<Session>>().unwrap_or_else(|| RwSignal::new(Session::signed_out()))
}

/// Refetch the signed-in user and settle the session.
///
/// A failed fetch settles as signed out rather than leaving the gates waiting.
pub async fn refresh_session<S: KeyValueStorage>(session: RwSignal<Session>, snapshot: UserSnapshotStore<S>) {
    session.update(Session::begin_refresh);
    let user = match api::fetch_current_user().await {
        Ok(user) => user,
        Err(e) => {
            log::warn!("session fetch failed: {e}");
            None
        }
    };
    match &user {
        Some(user) => snapshot.remember(user),
        None => snapshot.clear(),
    }
    session.set(Session::resolved(user));
}

/// End the backend session and forget everything cached for this user.
///
/// The biometric flag is a device setting and survives sign-out.
pub async fn sign_out<S: KeyValueStorage>(
    session: RwSignal<Session>,
    snapshot: UserSnapshotStore<S>,
    company: CompanySettingsCache<S>,
) {
    api::logout().await;
    snapshot.clear();
    company.clear();
    session.set(Session::signed_out());
    log::info!("signed out");
}

/// React to a failed API call. Returns the page to navigate to, if any.
///
/// A 401/403 means the backend session is gone: the local session settles as
/// signed out and the dashboard gate takes over the redirect to login.
pub fn handle_failure<S: KeyValueStorage>(
    failure: &ApiFailure,
    session: RwSignal<Session>,
    snapshot: &UserSnapshotStore<S>,
) -> Option<&'static str> {
    if *failure == ApiFailure::Unauthorized {
        snapshot.clear();
        session.set(Session::signed_out());
        log::info!("session expired");
    }
    failure_route(failure)
}
