//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching into a `Loadable`,
//! submit flows) and delegates rendering details to `components`.

pub mod admin_dashboard;
pub mod analytics;
pub mod campaign_detail;
pub mod create_campaign;
pub mod discover;
pub mod home;
pub mod my_campaigns;
pub mod not_found;
pub mod reset_password;
pub mod user_dashboard;
pub mod verify_email;
