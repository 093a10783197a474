//! # client
//!
//! Leptos + WASM frontend for the storefront account area: the maintenance
//! placeholder and the payment-method management page.
//!
//! This crate contains pages, components, view state, and the typed REST
//! client for the profile service. The `server` crate renders it with SSR
//! and reuses `net::types` to normalize proxied responses.

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
