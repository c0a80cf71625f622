//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <header class="landing-page__hero">
                <h1>"Timekeep"</h1>
                <p>"Attendance tracking with biometric clock-in for your whole team."</p>
                <div class="landing-page__actions">
                    <A href="/onboarding/company-setup">"Get started"</A>
                    <A href="/login">"Sign in"</A>
                </div>
            </header>
        </div>
    }
}
