//! Login page: email + password sign-in with post-login return.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::session_provider::{refresh_session, use_session};
use crate::net::api;
use crate::pages::rate_limited::failure_route;
use crate::state::redirect::ReturnTo;
use crate::state::user_snapshot::UserSnapshotStore;

const MISSING_FIELDS: &str = "Enter your email and password.";
const INVALID_EMAIL: &str = "Enter a valid email address.";

fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => {}
        _ => return Err(INVALID_EMAIL),
    }
    Ok((email.to_owned(), password.to_owned()))
}

fn login_failure_message(failure: &api::ApiFailure) -> String {
    match failure {
        api::ApiFailure::Unauthorized => "Incorrect email or password.".to_owned(),
        other => format!("Sign-in failed: {other}"),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let return_to = use_context::<RwSignal<ReturnTo>>();
    let snapshot = use_context::<UserSnapshotStore>().unwrap_or_default();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        let navigate = navigate.clone();
        let snapshot = snapshot.clone();
        leptos::task::spawn_local(async move {
            match api::login(&email_value, &password_value).await {
                Ok(()) => {
                    refresh_session(session, snapshot).await;
                    let target = return_to.map_or_else(
                        || crate::state::redirect::DEFAULT_AFTER_LOGIN.to_owned(),
                        |r| r.try_update(ReturnTo::take_or_default).unwrap_or_default(),
                    );
                    navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
                }
                Err(failure) => {
                    if let Some(route) = failure_route(&failure) {
                        navigate(route, NavigateOptions::default());
                    }
                    info.set(login_failure_message(&failure));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Timekeep"</h1>
                <p class="login-card__subtitle">"Sign in to your workspace"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@company.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
