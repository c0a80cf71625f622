//! Company settings page.
//!
//! Shows cached settings immediately, refetches on demand, and writes edits
//! through to both the backend and the per-user cache. Also hosts the
//! device's biometric reset and the company logo upload.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::components::session_provider::{handle_failure, use_session};
use crate::net::api::{self, ApiFailure};
use crate::net::types::CompanySettings;
use crate::state::biometric::BiometricStore;
use crate::state::company::CompanySettingsCache;
use crate::state::user_snapshot::UserSnapshotStore;

/// Client tag sent with logo uploads so the worker can namespace keys.
#[cfg(feature = "hydrate")]
const UPLOAD_CLIENT: &str = "dashboard";

fn settings_with_edits(base: &CompanySettings, name: &str, biometrics_required: bool) -> Option<CompanySettings> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(CompanySettings { id: base.id.clone(), name: name.to_owned(), biometrics_required })
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = use_session();
    let snapshot = use_context::<UserSnapshotStore>().unwrap_or_default();
    let cache = use_context::<CompanySettingsCache>().unwrap_or_default();
    let biometric = use_context::<BiometricStore>().unwrap_or_default();
    let navigate = use_navigate();

    let user_id = move || session.get_untracked().user.map(|u| u.id);
    let initial = user_id().and_then(|id| cache.get(&id));

    let settings = RwSignal::new(initial.clone());
    let name = RwSignal::new(initial.as_ref().map(|s| s.name.clone()).unwrap_or_default());
    let biometrics_required = RwSignal::new(initial.is_some_and(|s| s.biometrics_required));
    let device_enrolled = RwSignal::new(biometric.is_complete());
    let info = RwSignal::new(String::new());
    let logo_url = RwSignal::new(None::<String>);

    let report = {
        let navigate = navigate.clone();
        move |failure: ApiFailure, what: &str| {
            if let Some(route) = handle_failure(&failure, session, &snapshot) {
                navigate(route, NavigateOptions::default());
            }
            info.set(format!("{what} failed: {failure}"));
        }
    };

    let refetch = {
        let cache = cache.clone();
        let report = report.clone();
        move || {
            let cache = cache.clone();
            let report = report.clone();
            leptos::task::spawn_local(async move {
                match api::fetch_company_settings().await {
                    Ok(fresh) => {
                        if let Some(id) = user_id() {
                            cache.store(&id, fresh.clone());
                        }
                        name.set(fresh.name.clone());
                        biometrics_required.set(fresh.biometrics_required);
                        settings.set(Some(fresh));
                    }
                    Err(failure) => report(failure, "Loading settings"),
                }
            });
        }
    };

    let initial_refetch = refetch.clone();
    Effect::new(move || initial_refetch());

    let on_save = {
        let cache = cache.clone();
        let report = report.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(base) = settings.get_untracked() else {
                return;
            };
            let Some(edited) = settings_with_edits(&base, &name.get_untracked(), biometrics_required.get_untracked())
            else {
                info.set("Enter a company name.".to_owned());
                return;
            };
            let cache = cache.clone();
            let report = report.clone();
            leptos::task::spawn_local(async move {
                match api::save_company_settings(&edited).await {
                    Ok(saved) => {
                        if let Some(id) = user_id() {
                            cache.store(&id, saved.clone());
                        }
                        settings.set(Some(saved));
                        info.set("Saved.".to_owned());
                    }
                    Err(failure) => report(failure, "Saving settings"),
                }
            });
        }
    };

    let on_reset_biometric = move |_| {
        biometric.reset();
        device_enrolled.set(false);
    };

    let on_logo_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            let Some(file) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                return;
            };
            let report = report.clone();
            leptos::task::spawn_local(async move {
                match api::upload_image(&file, UPLOAD_CLIENT).await {
                    Ok(image) => logo_url.set(Some(image.url)),
                    Err(failure) => report(failure, "Logo upload"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, &report);
        }
    };

    view! {
        <div class="settings-page">
            <NavBar/>
            <h1>"Company settings"</h1>
            <form class="settings-form" on:submit=on_save>
                <label class="settings-form__label">
                    "Company name"
                    <input
                        class="settings-form__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="settings-form__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || biometrics_required.get()
                        on:change=move |ev| biometrics_required.set(event_target_checked(&ev))
                    />
                    "Require biometric clock-in"
                </label>
                <div class="settings-form__actions">
                    <button class="btn" type="button" on:click=move |_| refetch()>
                        "Refresh"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || settings.get().is_none()>
                        "Save"
                    </button>
                </div>
            </form>

            <section class="settings-section">
                <h2>"Company logo"</h2>
                <input type="file" accept="image/*" on:change=on_logo_change/>
                {move || logo_url.get().map(|url| view! { <img class="settings-section__logo" src=url alt="Company logo"/> })}
            </section>

            <section class="settings-section">
                <h2>"This device"</h2>
                <p>
                    {move || {
                        if device_enrolled.get() {
                            "Biometric clock-in is set up on this device."
                        } else {
                            "Biometric clock-in is not set up on this device."
                        }
                    }}
                </p>
                <button class="btn" on:click=on_reset_biometric disabled=move || !device_enrolled.get()>
                    "Reset biometric setup"
                </button>
            </section>

            <Show when=move || !info.get().is_empty()>
                <p class="settings-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
