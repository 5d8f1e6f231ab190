//! # tambo-client
//!
//! Leptos + WASM administration dashboard for the Tambo maternal and child
//! outreach program: collaborators, stations, patients, contacts,
//! assignments, announcements, alerts, home visits, exports and reports.
//!
//! Pages and components are thin views over the plain-Rust `state` and `net`
//! modules, which compile and test natively without a browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"console logger already installed".into());
    }
    leptos::mount::hydrate_body(app::App);
}
