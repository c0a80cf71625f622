//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::gate::{DashboardGate, LandingGate};
use crate::components::session_provider::SessionProvider;
use crate::pages::{
    dashboard::DashboardPage,
    landing::LandingPage,
    login::LoginPage,
    onboarding::{BiometricSetupPage, CompanySetupPage},
    rate_limited::RateLimitedPage,
    settings::SettingsPage,
};
use crate::state::biometric::BiometricStore;
use crate::state::company::CompanySettingsCache;
use crate::state::redirect::ReturnTo;
use crate::state::user_snapshot::UserSnapshotStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the persisted stores and redirect memory as context, mounts the
/// session provider, and wraps each route in its gate.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(BiometricStore::default());
    provide_context(CompanySettingsCache::default());
    provide_context(UserSnapshotStore::default());
    provide_context(RwSignal::new(ReturnTo::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/timekeep.css"/>
        <Title text="Timekeep"/>

        <Router>
            <SessionProvider>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <LandingGate><LandingPage/></LandingGate> }/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=(StaticSegment("onboarding"), StaticSegment("company-setup"))
                        view=|| view! { <LandingGate><CompanySetupPage/></LandingGate> }
                    />
                    <Route
                        path=(StaticSegment("onboarding"), StaticSegment("biometric-setup"))
                        view=|| view! { <LandingGate><BiometricSetupPage/></LandingGate> }
                    />
                    <Route path=StaticSegment("dashboard") view=|| view! { <DashboardGate><DashboardPage/></DashboardGate> }/>
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("settings"))
                        view=|| view! { <DashboardGate><SettingsPage/></DashboardGate> }
                    />
                    <Route path=StaticSegment("rate-limited") view=RateLimitedPage/>
                </Routes>
            </SessionProvider>
        </Router>
    }
}
