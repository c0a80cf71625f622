//! Onboarding flow: company setup, then biometric setup.
//!
//! Both steps sit behind the landing gate, so a user who has not finished may
//! leave and come back. Finishing the last step refreshes the session; the
//! gate then moves the now-onboarded user to the dashboard.

#[cfg(test)]
#[path = "onboarding_test.rs"]
mod onboarding_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::session_provider::{handle_failure, refresh_session, use_session};
use crate::net::api;
use crate::state::biometric::BiometricStore;
use crate::state::company::CompanySettingsCache;
use crate::state::user_snapshot::UserSnapshotStore;

pub const BIOMETRIC_SETUP_ROUTE: &str = "/onboarding/biometric-setup";

const MAX_COMPANY_NAME_LEN: usize = 100;

fn validate_company_name(raw: &str) -> Result<String, &'static str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err("Enter your company name.");
    }
    if name.chars().count() > MAX_COMPANY_NAME_LEN {
        return Err("Company name must be 100 characters or fewer.");
    }
    Ok(name.to_owned())
}

#[component]
pub fn CompanySetupPage() -> impl IntoView {
    let session = use_session();
    let snapshot = use_context::<UserSnapshotStore>().unwrap_or_default();
    let company_cache = use_context::<CompanySettingsCache>().unwrap_or_default();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let biometrics_required = RwSignal::new(true);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let company_name = match validate_company_name(&name.get()) {
            Ok(n) => n,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let navigate = navigate.clone();
        let snapshot = snapshot.clone();
        let company_cache = company_cache.clone();
        let required = biometrics_required.get();
        leptos::task::spawn_local(async move {
            match api::create_company(&company_name, required).await {
                Ok(settings) => {
                    if let Some(user) = session.get_untracked().user {
                        company_cache.store(&user.id, settings);
                    }
                    navigate(BIOMETRIC_SETUP_ROUTE, NavigateOptions::default());
                }
                Err(failure) => {
                    if let Some(route) = handle_failure(&failure, session, &snapshot) {
                        navigate(route, NavigateOptions::default());
                    }
                    info.set(format!("Could not create company: {failure}"));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="onboarding-page">
            <p class="onboarding-page__step">"Step 1 of 2"</p>
            <h1>"Set up your company"</h1>
            <form class="onboarding-form" on:submit=on_submit>
                <input
                    class="onboarding-input"
                    type="text"
                    placeholder="Company name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <label class="onboarding-checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || biometrics_required.get()
                        on:change=move |ev| biometrics_required.set(event_target_checked(&ev))
                    />
                    "Require biometric clock-in"
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Continue"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="onboarding-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}

#[component]
pub fn BiometricSetupPage() -> impl IntoView {
    let session = use_session();
    let biometric = use_context::<BiometricStore>().unwrap_or_default();
    let snapshot = use_context::<UserSnapshotStore>().unwrap_or_default();
    let navigate = use_navigate();

    let enrolled = RwSignal::new(biometric.is_complete());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_enroll = {
        let biometric = biometric.clone();
        move |_| {
            biometric.set_complete(true);
            enrolled.set(true);
        }
    };

    let on_finish = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        let navigate = navigate.clone();
        let snapshot = snapshot.clone();
        leptos::task::spawn_local(async move {
            match api::complete_onboarding().await {
                Ok(()) => refresh_session(session, snapshot).await,
                Err(failure) => {
                    if let Some(route) = handle_failure(&failure, session, &snapshot) {
                        navigate(route, NavigateOptions::default());
                    }
                    info.set(format!("Could not finish onboarding: {failure}"));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="onboarding-page">
            <p class="onboarding-page__step">"Step 2 of 2"</p>
            <h1>"Biometric clock-in"</h1>
            <p>
                {move || {
                    if enrolled.get() {
                        "This device is set up for biometric clock-in."
                    } else {
                        "Register this device so employees can clock in with a fingerprint or face scan."
                    }
                }}
            </p>
            <div class="onboarding-page__actions">
                <button class="btn" on:click=on_enroll disabled=move || enrolled.get()>
                    "Set up this device"
                </button>
                <button class="btn btn--primary" on:click=on_finish disabled=move || busy.get()>
                    "Finish"
                </button>
            </div>
            <Show when=move || !info.get().is_empty()>
                <p class="onboarding-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
