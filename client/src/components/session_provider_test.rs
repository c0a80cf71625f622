use futures::executor::block_on;
use leptos::reactive::owner::Owner;

use super::*;
use crate::net::types::{CompanySettings, User};
use crate::state::biometric::BiometricStore;
use crate::state::persist::MemoryStorage;

fn user() -> User {
    User {
        id: "u1".to_owned(),
        email: "ana@example.com".to_owned(),
        name: "Ana".to_owned(),
        company_id: Some("c1".to_owned()),
        onboarding_completed: true,
    }
}

fn settings() -> CompanySettings {
    CompanySettings { id: "c1".to_owned(), name: "Acme".to_owned(), biometrics_required: true }
}

#[test]
fn failed_fetch_settles_signed_out_and_clears_snapshot() {
    Owner::new().with(|| {
        let storage = MemoryStorage::new();
        let snapshot = UserSnapshotStore::new(storage.clone());
        snapshot.remember(&user());
        let session = RwSignal::new(Session::resolved(Some(user())));

        // Natively the fetch answers `Unavailable`.
        block_on(refresh_session(session, snapshot.clone()));

        assert_eq!(session.get_untracked(), Session::signed_out());
        assert_eq!(UserSnapshotStore::new(storage).current(), None);
    });
}

#[test]
fn refresh_from_loading_never_stays_loading() {
    Owner::new().with(|| {
        let session = RwSignal::new(Session::default());
        block_on(refresh_session(session, UserSnapshotStore::new(MemoryStorage::new())));
        assert!(!session.get_untracked().loading);
    });
}

#[test]
fn sign_out_clears_user_caches_but_keeps_biometric_flag() {
    Owner::new().with(|| {
        let storage = MemoryStorage::new();
        let snapshot = UserSnapshotStore::new(storage.clone());
        let company = CompanySettingsCache::new(storage.clone());
        let biometric = BiometricStore::new(storage.clone());
        snapshot.remember(&user());
        company.store("u1", settings());
        biometric.set_complete(true);
        let session = RwSignal::new(Session::resolved(Some(user())));

        block_on(sign_out(session, snapshot, company));

        assert_eq!(session.get_untracked(), Session::signed_out());
        assert_eq!(UserSnapshotStore::new(storage.clone()).current(), None);
        assert_eq!(CompanySettingsCache::new(storage.clone()).get("u1"), None);
        assert!(BiometricStore::new(storage).is_complete());
    });
}

#[test]
fn unauthorized_failure_expires_session_without_navigating() {
    Owner::new().with(|| {
        let snapshot = UserSnapshotStore::new(MemoryStorage::new());
        snapshot.remember(&user());
        let session = RwSignal::new(Session::resolved(Some(user())));

        let route = handle_failure(&ApiFailure::Unauthorized, session, &snapshot);

        assert_eq!(route, None);
        assert_eq!(session.get_untracked(), Session::signed_out());
        assert_eq!(snapshot.current(), None);
    });
}

#[test]
fn rate_limited_failure_keeps_session_and_routes_to_blocking_page() {
    Owner::new().with(|| {
        let snapshot = UserSnapshotStore::new(MemoryStorage::new());
        snapshot.remember(&user());
        let session = RwSignal::new(Session::resolved(Some(user())));

        let route = handle_failure(&ApiFailure::RateLimited, session, &snapshot);

        assert_eq!(route, Some("/rate-limited"));
        assert_eq!(session.get_untracked(), Session::resolved(Some(user())));
        assert_eq!(snapshot.current(), Some(user()));
    });
}

#[test]
fn other_failures_leave_session_alone() {
    Owner::new().with(|| {
        let snapshot = UserSnapshotStore::new(MemoryStorage::new());
        let session = RwSignal::new(Session::resolved(Some(user())));

        assert_eq!(handle_failure(&ApiFailure::Status(500), session, &snapshot), None);
        assert_eq!(session.get_untracked(), Session::resolved(Some(user())));
    });
}

#[test]
fn use_session_without_provider_is_signed_out() {
    Owner::new().with(|| {
        assert_eq!(use_session().get_untracked(), Session::signed_out());
    });
}
