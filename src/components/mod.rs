//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome, modals, and wizard panels while reading and
//! writing shared state from Leptos context providers.

pub mod ai_optimizer;
pub mod auth_modal;
pub mod campaign_basics;
pub mod campaign_card;
pub mod guarded;
pub mod loading_screen;
pub mod monte_carlo;
pub mod navigation;
pub mod profile_modal;
pub mod reward_tiers;
pub mod toaster;
