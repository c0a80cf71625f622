//! Route gate components.
//!
//! Both gates delegate the decision to [`crate::util::gate::decide`] and only
//! carry it out: show a placeholder, render children, or navigate (replacing
//! history). A gate mounted without a `SessionProvider` above it behaves as if
//! nobody is signed in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::redirect::{ReturnTo, join_location};
use crate::state::session::Session;
use crate::state::user_snapshot::{UserSnapshotStore, display_name};
use crate::util::gate::{DASHBOARD, GateDecision, GatePolicy, LANDING, decide};

/// Neutral placeholder shown while the session is loading or a redirect is
/// about to happen. Greets the last signed-in user on this device, if any.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    let snapshot = use_context::<UserSnapshotStore>();
    let greeting = RwSignal::new(None::<String>);
    // Filled after mount so the server and hydrated markup agree.
    Effect::new(move || {
        let user = snapshot.as_ref().and_then(UserSnapshotStore::current);
        greeting.set(user.map(|u| format!("Welcome back, {}", display_name(&u))));
    });

    view! {
        <div class="loading-screen" aria-busy="true">
            <div class="loading-screen__spinner"></div>
            {move || greeting.get().map(|text| view! { <p class="loading-screen__greeting">{text}</p> })}
        </div>
    }
}

/// Wraps public pages. Onboarded users are sent to the dashboard.
#[component]
pub fn LandingGate(children: ChildrenFn) -> impl IntoView {
    gated(LANDING, children)
}

/// Wraps protected pages. Anonymous visitors go to login, users who have not
/// finished onboarding restart it from the first step.
#[component]
pub fn DashboardGate(children: ChildrenFn) -> impl IntoView {
    gated(DASHBOARD, children)
}

fn gated(policy: GatePolicy, children: ChildrenFn) -> impl IntoView {
    let session = use_context::<RwSignal<Session>>();
    let return_to = use_context::<RwSignal<ReturnTo>>();
    let location = use_location();
    let (pathname, search) = (location.pathname, location.search);
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        let current = session.map(|s| s.get());
        let here = join_location(&pathname.get(), &search.get());
        decide(&policy, current.as_ref(), &here)
    });

    Effect::new(move || {
        if let GateDecision::Redirect(target) = decision.get() {
            if let (Some(from), Some(return_to)) = (target.from, return_to) {
                return_to.update(|r| r.record(from));
            }
            navigate(target.to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match decision.get() {
        GateDecision::Render => children().into_any(),
        GateDecision::Loading | GateDecision::Redirect(_) => view! { <LoadingScreen/> }.into_any(),
    }
}
