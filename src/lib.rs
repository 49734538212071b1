//! # energy-client
//!
//! Browser utilities for the Smart Energy Scheduler pages: navigation
//! highlighting, JSON API calls, card reveal animations, toasts and loading
//! markers, currency/time formatting, numeric validation, and JSON
//! `localStorage` persistence.
//!
//! Built with the `hydrate` feature the crate is a WASM module whose start
//! hook installs the page behavior and publishes `window.appUtils`. Without
//! it, the pure helpers and adapter traits compile natively for tests and
//! non-browser callers.

pub mod consts;
pub mod dom;
pub mod exports;
pub mod net;
pub mod util;

/// WASM entry point: install page behavior and the `appUtils` namespace.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    dom::install();
    if let Err(e) = exports::install_app_utils() {
        leptos::logging::error!("appUtils install failed: {e:?}");
    }
    leptos::logging::log!("{}", consts::INIT_MESSAGE);
}
