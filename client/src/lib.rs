//! # client
//!
//! Leptos + WASM frontend for the SikshaConnect education site.
//!
//! Page behavior lives in `state` as plain controllers over small binding
//! traits so it runs under native tests with a fake clock; `components` bind
//! those controllers to signals, and `util` holds the browser-facing pieces
//! (storage, timers, visibility, document theme class).

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
