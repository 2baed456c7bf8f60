//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure derived
//! values from page and component logic to improve reuse and testability.

pub mod browser;
pub mod metrics;
pub mod route_guard;
