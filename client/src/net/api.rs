//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: stubs returning
//! [`ApiFailure::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures degrade UI
//! behavior without crashing hydration. HTTP 429 is singled out as
//! [`ApiFailure::RateLimited`] so pages can route to the blocking
//! rate-limit screen.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

use super::types::{AttendanceStatus, CompanySettings, User};
#[cfg(feature = "hydrate")]
use super::types::UploadedImage;

#[cfg(feature = "hydrate")]
const ME_ENDPOINT: &str = "/api/auth/me";
#[cfg(feature = "hydrate")]
const LOGIN_ENDPOINT: &str = "/api/auth/login";
#[cfg(feature = "hydrate")]
const LOGOUT_ENDPOINT: &str = "/api/auth/logout";
#[cfg(feature = "hydrate")]
const COMPANY_SETTINGS_ENDPOINT: &str = "/api/company/settings";
#[cfg(feature = "hydrate")]
const ONBOARDING_COMPANY_ENDPOINT: &str = "/api/onboarding/company";
#[cfg(feature = "hydrate")]
const ONBOARDING_COMPLETE_ENDPOINT: &str = "/api/onboarding/complete";
#[cfg(feature = "hydrate")]
const ATTENDANCE_TODAY_ENDPOINT: &str = "/api/attendance/today";
#[cfg(feature = "hydrate")]
const UPLOAD_ENDPOINT: &str = "/api/upload";

/// Why an API call did not produce a value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiFailure {
    /// The backend answered HTTP 429.
    #[error("too many requests")]
    RateLimited,
    /// The backend answered 401/403.
    #[error("not signed in")]
    Unauthorized,
    /// Any other non-success status.
    #[error("request failed: {0}")]
    Status(u16),
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// A success response carried a body we could not decode.
    #[error("invalid response: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiFailure {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16) -> Self {
        match status {
            429 => Self::RateLimited,
            401 | 403 => Self::Unauthorized,
            other => Self::Status(other),
        }
    }
}

/// Clock action posted to the attendance endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockAction {
    In,
    Out,
}

impl ClockAction {
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::In => "/api/attendance/clock-in",
            Self::Out => "/api/attendance/clock-out",
        }
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiFailure> {
    if !resp.ok() {
        return Err(ApiFailure::from_status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiFailure::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn check_status(resp: &gloo_net::http::Response) -> Result<(), ApiFailure> {
    if resp.ok() { Ok(()) } else { Err(ApiFailure::from_status(resp.status())) }
}

#[cfg(feature = "hydrate")]
fn network(e: gloo_net::Error) -> ApiFailure {
    ApiFailure::Network(e.to_string())
}

/// Fetch the currently authenticated user from `/api/auth/me`.
///
/// A 401/403 answer is not an error: it means nobody is signed in.
///
/// # Errors
///
/// Returns [`ApiFailure`] for transport failures and unexpected statuses.
pub async fn fetch_current_user() -> Result<Option<User>, ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ME_ENDPOINT).send().await.map_err(network)?;
        match read_json::<User>(resp).await {
            Ok(user) => Ok(Some(user)),
            Err(ApiFailure::Unauthorized) => Ok(None),
            Err(e) => Err(e),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiFailure::Unavailable)
    }
}

/// Sign in with email + password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns [`ApiFailure::Unauthorized`] on bad credentials.
pub async fn login(email: &str, password: &str) -> Result<(), ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&payload)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        check_status(&resp)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiFailure::Unavailable)
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await {
            log::warn!("logout request failed: {e}");
        }
    }
}

/// Fetch company settings for the signed-in user's company.
///
/// # Errors
///
/// Returns [`ApiFailure`] when the request fails.
pub async fn fetch_company_settings() -> Result<CompanySettings, ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(COMPANY_SETTINGS_ENDPOINT)
            .send()
            .await
            .map_err(network)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiFailure::Unavailable)
    }
}

/// Persist edited company settings via `PUT /api/company/settings`.
///
/// # Errors
///
/// Returns [`ApiFailure`] when the request fails.
pub async fn save_company_settings(settings: &CompanySettings) -> Result<CompanySettings, ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(COMPANY_SETTINGS_ENDPOINT)
            .json(settings)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = settings;
        Err(ApiFailure::Unavailable)
    }
}

/// Create the user's company during onboarding.
///
/// # Errors
///
/// Returns [`ApiFailure`] when the request fails.
pub async fn create_company(name: &str, biometrics_required: bool) -> Result<CompanySettings, ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name, "biometricsRequired": biometrics_required });
        let resp = gloo_net::http::Request::post(ONBOARDING_COMPANY_ENDPOINT)
            .json(&payload)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, biometrics_required);
        Err(ApiFailure::Unavailable)
    }
}

/// Mark onboarding as finished for the current user.
///
/// # Errors
///
/// Returns [`ApiFailure`] when the request fails.
pub async fn complete_onboarding() -> Result<(), ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(ONBOARDING_COMPLETE_ENDPOINT)
            .send()
            .await
            .map_err(network)?;
        check_status(&resp)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiFailure::Unavailable)
    }
}

/// Fetch today's attendance record.
///
/// # Errors
///
/// Returns [`ApiFailure`] when the request fails.
pub async fn fetch_attendance_today() -> Result<AttendanceStatus, ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ATTENDANCE_TODAY_ENDPOINT)
            .send()
            .await
            .map_err(network)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiFailure::Unavailable)
    }
}

/// Clock in or out; the backend answers with the updated record.
///
/// # Errors
///
/// Returns [`ApiFailure`] when the request fails.
pub async fn clock(action: ClockAction) -> Result<AttendanceStatus, ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(action.endpoint())
            .send()
            .await
            .map_err(network)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = action;
        Err(ApiFailure::Unavailable)
    }
}

/// Upload an image through the server's `/api/upload` proxy.
///
/// # Errors
///
/// Any non-2xx answer is a failure; no partial result is returned.
#[cfg(feature = "hydrate")]
pub async fn upload_image(file: &web_sys::File, client: &str) -> Result<UploadedImage, ApiFailure> {
    let form = web_sys::FormData::new().map_err(|_| ApiFailure::Network("form data unavailable".to_owned()))?;
    form.append_with_blob_and_filename("image", file, &file.name())
        .map_err(|_| ApiFailure::Network("could not attach image".to_owned()))?;
    form.append_with_str("client", client)
        .map_err(|_| ApiFailure::Network("could not attach client".to_owned()))?;
    let resp = gloo_net::http::Request::post(UPLOAD_ENDPOINT)
        .body(form)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    read_json(resp).await
}
