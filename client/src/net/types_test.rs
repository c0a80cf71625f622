use super::*;

#[test]
fn user_deserializes_camel_case_fields() {
    let json = r#"{"id":"u1","email":"a@b.com","name":"Ana","companyId":"c9","onboardingCompleted":true}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.company_id.as_deref(), Some("c9"));
    assert!(user.onboarding_completed);
}

#[test]
fn user_missing_onboarding_flag_defaults_to_incomplete() {
    let json = r#"{"id":"u1","email":"a@b.com"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert!(!user.onboarding_completed);
    assert!(user.company_id.is_none());
    assert!(user.name.is_empty());
}

#[test]
fn company_settings_reads_biometrics_required() {
    let json = r#"{"id":"c1","name":"Acme","biometricsRequired":true}"#;
    let settings: CompanySettings = serde_json::from_str(json).unwrap();
    assert_eq!(settings.name, "Acme");
    assert!(settings.biometrics_required);
}

#[test]
fn attendance_status_defaults_to_not_clocked_in() {
    let status: AttendanceStatus = serde_json::from_str("{}").unwrap();
    assert_eq!(status, AttendanceStatus::default());
}

#[test]
fn uploaded_image_requires_both_fields() {
    assert!(serde_json::from_str::<UploadedImage>(r#"{"key":"k"}"#).is_err());
    let image: UploadedImage = serde_json::from_str(r#"{"key":"k","url":"https://cdn/k"}"#).unwrap();
    assert_eq!(image.url, "https://cdn/k");
}
