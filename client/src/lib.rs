//! # timekeep-client
//!
//! Leptos + WASM web dashboard for the Timekeep attendance product.
//!
//! This crate contains the session provider, the route gates that decide who
//! may see public and protected pages, the device-persisted client stores,
//! pages, and REST helpers for the backend. Decision logic is kept free of
//! browser APIs so it can be tested natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
