//! # client
//!
//! Leptos + WASM frontend for the shortlink URL shortener.
//!
//! Pages, components, and browser state live here. Everything that is not
//! browser-specific (wire model, request builders, error classification, the
//! auth state machine) comes from the `shortlink` crate so the CLI and the
//! browser behave the same way.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
