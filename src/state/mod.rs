//! Client-side state modules.
//!
//! ARCHITECTURE
//! ============
//! Each module holds plain data types plus their transitions; components wrap
//! them in `RwSignal`s and provide them through Leptos context. Keeping the
//! transitions off the signals makes them testable without a browser.

pub mod ai;
pub mod auth;
pub mod campaign_draft;
pub mod fetch;
pub mod simulation;
pub mod toast;
pub mod ui;
