use super::*;
use crate::net::types::User;

fn user(onboarded: bool) -> User {
    User {
        id: "u1".to_owned(),
        email: "ana@example.com".to_owned(),
        name: "Ana".to_owned(),
        company_id: None,
        onboarding_completed: onboarded,
    }
}

fn loading(user: Option<User>) -> Session {
    Session { user, loading: true }
}

fn settled(user: Option<User>) -> Session {
    Session { user, loading: false }
}

fn redirect(to: &'static str, from: Option<&str>) -> GateDecision {
    GateDecision::Redirect(RedirectTarget { to, from: from.map(str::to_owned) })
}

// =============================================================
// Access projection
// =============================================================

#[test]
fn access_without_provider_is_unauthenticated() {
    assert_eq!(Access::of(None), Access::Unauthenticated);
}

#[test]
fn access_loading_wins_over_user() {
    assert_eq!(Access::of(Some(&loading(Some(user(true))))), Access::Loading);
    assert_eq!(Access::of(Some(&loading(None))), Access::Loading);
}

#[test]
fn access_settled_states() {
    assert_eq!(Access::of(Some(&settled(None))), Access::Unauthenticated);
    assert_eq!(Access::of(Some(&settled(Some(user(false))))), Access::AuthenticatedIncomplete);
    assert_eq!(Access::of(Some(&settled(Some(user(true))))), Access::AuthenticatedComplete);
}

// =============================================================
// Loading
// =============================================================

#[test]
fn both_gates_wait_while_loading_regardless_of_user() {
    for user in [None, Some(user(false)), Some(user(true))] {
        let session = loading(user);
        assert_eq!(decide(&LANDING, Some(&session), "/"), GateDecision::Loading);
        assert_eq!(decide(&DASHBOARD, Some(&session), "/dashboard"), GateDecision::Loading);
    }
}

// =============================================================
// Unauthenticated
// =============================================================

#[test]
fn landing_renders_for_anonymous_visitor() {
    assert_eq!(decide(&LANDING, Some(&settled(None)), "/"), GateDecision::Render);
}

#[test]
fn dashboard_sends_anonymous_visitor_to_login_with_source() {
    let decision = decide(&DASHBOARD, Some(&settled(None)), "/dashboard/settings?tab=company");
    assert_eq!(decision, redirect(LOGIN_ROUTE, Some("/dashboard/settings?tab=company")));
}

// =============================================================
// Authenticated, onboarding incomplete
// =============================================================

#[test]
fn landing_renders_for_incomplete_user() {
    let session = settled(Some(user(false)));
    assert_eq!(decide(&LANDING, Some(&session), "/"), GateDecision::Render);
}

#[test]
fn dashboard_restarts_onboarding_for_incomplete_user() {
    let session = settled(Some(user(false)));
    assert_eq!(
        decide(&DASHBOARD, Some(&session), "/dashboard"),
        redirect("/onboarding/company-setup", None)
    );
}

// =============================================================
// Authenticated, onboarding complete
// =============================================================

#[test]
fn landing_sends_onboarded_user_to_dashboard() {
    let session = settled(Some(user(true)));
    assert_eq!(decide(&LANDING, Some(&session), "/"), redirect("/dashboard", None));
}

#[test]
fn dashboard_renders_for_onboarded_user() {
    let session = settled(Some(user(true)));
    assert_eq!(decide(&DASHBOARD, Some(&session), "/dashboard"), GateDecision::Render);
}

// =============================================================
// Missing provider
// =============================================================

#[test]
fn missing_provider_degrades_to_anonymous() {
    assert_eq!(decide(&LANDING, None, "/"), GateDecision::Render);
    assert_eq!(decide(&DASHBOARD, None, "/dashboard"), redirect(LOGIN_ROUTE, Some("/dashboard")));
}

// =============================================================
// Invariants
// =============================================================

#[test]
fn dashboard_never_renders_without_completed_user() {
    for session in [settled(None), settled(Some(user(false))), loading(None), loading(Some(user(false)))] {
        assert_ne!(decide(&DASHBOARD, Some(&session), "/dashboard"), GateDecision::Render);
    }
    assert_ne!(decide(&DASHBOARD, None, "/dashboard"), GateDecision::Render);
}

#[test]
fn custom_policy_is_honoured() {
    let policy = GatePolicy {
        on_unauthenticated: GateAction::Render,
        on_incomplete: GateAction::Redirect { to: "/help", remember_location: true },
        on_complete: GateAction::Render,
    };
    let session = settled(Some(user(false)));
    assert_eq!(decide(&policy, Some(&session), "/x"), redirect("/help", Some("/x")));
}
