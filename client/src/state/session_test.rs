use super::*;

fn user(onboarded: bool) -> User {
    User {
        id: "u1".to_owned(),
        email: "ana@example.com".to_owned(),
        name: "Ana".to_owned(),
        company_id: None,
        onboarding_completed: onboarded,
    }
}

#[test]
fn default_session_is_loading_without_user() {
    let session = Session::default();
    assert!(session.loading);
    assert!(session.user.is_none());
}

#[test]
fn signed_out_is_settled() {
    let session = Session::signed_out();
    assert!(!session.loading);
    assert!(session.user.is_none());
}

#[test]
fn resolved_clears_loading() {
    let session = Session::resolved(Some(user(true)));
    assert!(!session.loading);
    assert!(session.is_onboarded());
}

#[test]
fn begin_refresh_keeps_user() {
    let mut session = Session::resolved(Some(user(false)));
    session.begin_refresh();
    assert!(session.loading);
    assert_eq!(session.user, Some(user(false)));
}

#[test]
fn is_onboarded_requires_completed_user() {
    assert!(!Session::signed_out().is_onboarded());
    assert!(!Session::resolved(Some(user(false))).is_onboarded());
}
