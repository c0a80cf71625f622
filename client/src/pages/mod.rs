//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration. Access control lives in the
//! route table (`app.rs`), where pages are wrapped in the landing or dashboard
//! gate.

pub mod dashboard;
pub mod landing;
pub mod login;
pub mod onboarding;
pub mod rate_limited;
pub mod settings;
