//! # portfolio
//!
//! Leptos + WASM single-page portfolio site.
//!
//! This crate contains the page, its section components, the view state
//! (theme, scroll flag, contact form), the static content tables, and the
//! browser capability seams (`util`) that keep the state transitions
//! testable without a rendering environment.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the page on `<body>`.
#[cfg(feature = "csr")]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(config::LOG_LEVEL) {
        web_sys::console::warn_1(&format!("logger already initialized: {err}").into());
    }
    log::info!("mounting {}", config::SITE_TITLE);
    leptos::mount::mount_to_body(app::App);
}
