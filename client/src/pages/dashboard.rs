//! Dashboard page: today's attendance with clock-in/out.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::components::session_provider::{handle_failure, use_session};
use crate::net::api::{self, ClockAction};
use crate::net::types::AttendanceStatus;
use crate::state::user_snapshot::UserSnapshotStore;

/// Where the user stands for today.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ClockState {
    NotClockedIn,
    ClockedIn,
    ClockedOut,
}

impl ClockState {
    fn of(status: &AttendanceStatus) -> Self {
        match (&status.clocked_in_at, &status.clocked_out_at) {
            (None, _) => Self::NotClockedIn,
            (Some(_), None) => Self::ClockedIn,
            (Some(_), Some(_)) => Self::ClockedOut,
        }
    }

    fn next_action(self) -> Option<ClockAction> {
        match self {
            Self::NotClockedIn => Some(ClockAction::In),
            Self::ClockedIn => Some(ClockAction::Out),
            Self::ClockedOut => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::NotClockedIn => "You haven't clocked in today.",
            Self::ClockedIn => "You're clocked in.",
            Self::ClockedOut => "You're done for today.",
        }
    }
}

fn action_label(action: ClockAction) -> &'static str {
    match action {
        ClockAction::In => "Clock in",
        ClockAction::Out => "Clock out",
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let snapshot = use_context::<UserSnapshotStore>().unwrap_or_default();
    let navigate = use_navigate();
    let status = RwSignal::new(AttendanceStatus::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let load_nav = navigate.clone();
    let load_snapshot = snapshot.clone();
    Effect::new(move || {
        let navigate = load_nav.clone();
        let snapshot = load_snapshot.clone();
        leptos::task::spawn_local(async move {
            match api::fetch_attendance_today().await {
                Ok(today) => status.set(today),
                Err(failure) => {
                    if let Some(route) = handle_failure(&failure, session, &snapshot) {
                        navigate(route, NavigateOptions::default());
                    }
                    log::warn!("attendance fetch failed: {failure}");
                }
            }
        });
    });

    let state = move || ClockState::of(&status.get());

    let on_clock = move |_| {
        let Some(action) = ClockState::of(&status.get_untracked()).next_action() else {
            return;
        };
        if busy.get() {
            return;
        }
        busy.set(true);
        let navigate = navigate.clone();
        let snapshot = snapshot.clone();
        leptos::task::spawn_local(async move {
            match api::clock(action).await {
                Ok(updated) => {
                    status.set(updated);
                    info.set(String::new());
                }
                Err(failure) => {
                    if let Some(route) = handle_failure(&failure, session, &snapshot) {
                        navigate(route, NavigateOptions::default());
                    }
                    info.set(format!("{} failed: {failure}", action_label(action)));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="dashboard-page">
            <NavBar/>
            <section class="attendance-card">
                <h1>"Today"</h1>
                <p class="attendance-card__status">{move || state().label()}</p>
                <button
                    class="btn btn--primary"
                    on:click=on_clock
                    disabled=move || busy.get() || state().next_action().is_none()
                >
                    {move || state().next_action().map_or("Done", action_label)}
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="attendance-card__message">{move || info.get()}</p>
                </Show>
            </section>
        </div>
    }
}
