//! Full-page "too many requests" state.
//!
//! Shown after any API call answers HTTP 429. The only way out is going back;
//! there is no countdown and nothing retries automatically.

#[cfg(test)]
#[path = "rate_limited_test.rs"]
mod rate_limited_test;

use leptos::prelude::*;

use crate::net::api::ApiFailure;

pub const RATE_LIMITED_ROUTE: &str = "/rate-limited";

/// Page a failed API call should send the user to, if any. Expired sessions
/// are handled by the session instead of a direct navigation.
pub fn failure_route(failure: &ApiFailure) -> Option<&'static str> {
    match failure {
        ApiFailure::RateLimited => Some(RATE_LIMITED_ROUTE),
        _ => None,
    }
}

#[component]
pub fn RateLimitedPage() -> impl IntoView {
    let on_back = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.history().and_then(|history| history.back()) {
                    log::warn!("history back failed: {e:?}");
                }
            }
        }
    };

    view! {
        <div class="rate-limited-page">
            <div class="rate-limited-card">
                <h1>"Too many requests"</h1>
                <p>"You're doing that a little too often. Please wait a moment before trying again."</p>
                <button class="btn btn--primary" on:click=on_back>
                    "Go back"
                </button>
            </div>
        </div>
    }
}
