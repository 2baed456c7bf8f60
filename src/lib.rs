//! FundAI web client.
//!
//! A Leptos single-page app for the FundAI crowdfunding platform. Sign-in
//! goes through a hosted identity provider; campaign data, admin data and
//! the AI tooling come from the FundAI REST backend.
//!
//! Build with the `csr` feature (Trunk does this via `index.html`) for the
//! browser. Without it every network call reports `Unavailable`, which keeps
//! the state and formatting logic testable with a plain `cargo test`.

pub mod app;
pub mod components;
pub mod config;
pub mod identity;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and logger, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("logger already initialised");
    }
    leptos::mount::mount_to_body(app::App);
}
