//! # folio
//!
//! Leptos + WASM front end for a single-page personal profile site.
//!
//! Almost everything on the page is static content. This crate holds the few
//! pieces with real state and timing: the persisted theme preference, the
//! scroll spy that highlights the section in view, the rotating headline, the
//! mobile navigation disclosure, and the contact form buffer.
//!
//! Browser glue is compiled only with the `csr` feature; without it every
//! platform call is a no-op so the state machines can be tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and mounts the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
