//! Dashboard header with navigation links and sign-out.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::session_provider::{sign_out, use_session};
use crate::state::company::CompanySettingsCache;
use crate::state::user_snapshot::{UserSnapshotStore, display_name};

#[component]
pub fn NavBar() -> impl IntoView {
    let session = use_session();
    let snapshot = use_context::<UserSnapshotStore>().unwrap_or_default();
    let company = use_context::<CompanySettingsCache>().unwrap_or_default();

    let name = move || session.with(|s| s.user.as_ref().map(|u| display_name(u).to_owned()).unwrap_or_default());

    let on_sign_out = move |_| {
        let (snapshot, company) = (snapshot.clone(), company.clone());
        leptos::task::spawn_local(sign_out(session, snapshot, company));
    };

    view! {
        <header class="nav-bar">
            <span class="nav-bar__brand">"Timekeep"</span>
            <nav class="nav-bar__links">
                <A href="/dashboard">"Attendance"</A>
                <A href="/dashboard/settings">"Settings"</A>
            </nav>
            <span class="nav-bar__user">{name}</span>
            <button class="btn" on:click=on_sign_out>"Sign out"</button>
        </header>
    }
}
