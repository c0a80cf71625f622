//! Shared DTOs for the dashboard/backend boundary.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON so serde round-trips stay
//! lossless; Rust-side names stay snake_case.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in employee as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: String,
    /// Company the user administers, once company setup has run.
    #[serde(default)]
    pub company_id: Option<String>,
    /// Whether the multi-step onboarding flow has been finished.
    #[serde(default)]
    pub onboarding_completed: bool,
}

/// Company-wide settings cached per signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySettings {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub biometrics_required: bool,
}

/// Today's attendance record for the current user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceStatus {
    /// RFC 3339 clock-in timestamp, if clocked in today.
    pub clocked_in_at: Option<String>,
    /// RFC 3339 clock-out timestamp, if clocked out today.
    pub clocked_out_at: Option<String>,
}

/// Result of a successful image upload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub key: String,
    pub url: String,
}
