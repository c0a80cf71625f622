use super::*;

#[test]
fn take_returns_recorded_location_once() {
    let mut return_to = ReturnTo::default();
    return_to.record("/dashboard/settings".to_owned());
    assert_eq!(return_to.take_or_default(), "/dashboard/settings");
    assert_eq!(return_to.take_or_default(), DEFAULT_AFTER_LOGIN);
}

#[test]
fn take_without_record_defaults_to_dashboard() {
    assert_eq!(ReturnTo::default().take_or_default(), "/dashboard");
}

#[test]
fn take_rejects_off_site_locations() {
    let mut return_to = ReturnTo::default();
    return_to.record("//evil.example/steal".to_owned());
    assert_eq!(return_to.take_or_default(), DEFAULT_AFTER_LOGIN);

    return_to.record("https://evil.example".to_owned());
    assert_eq!(return_to.take_or_default(), DEFAULT_AFTER_LOGIN);
}

#[test]
fn is_local_path_cases() {
    assert!(is_local_path("/dashboard"));
    assert!(is_local_path("/dashboard?tab=week"));
    assert!(!is_local_path("dashboard"));
    assert!(!is_local_path("//host"));
    assert!(!is_local_path("/\\host"));
    assert!(!is_local_path(""));
}

#[test]
fn join_location_with_and_without_search() {
    assert_eq!(join_location("/dashboard", ""), "/dashboard");
    assert_eq!(join_location("/dashboard", "?tab=week"), "/dashboard?tab=week");
    assert_eq!(join_location("/dashboard", "tab=week"), "/dashboard?tab=week");
}
