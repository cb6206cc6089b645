//! # client
//!
//! Leptos + WASM frontend for Sitewatch, the web-monitoring dashboard.
//!
//! This crate contains pages, components, reactive state, and REST helpers.
//! Change detection, field diffing, and timestamp labelling for execution
//! history come from the `executions` crate; this crate only renders them.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
