//! Route access rules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route declares an access level. The decision is a pure function of
//! that level and the current user, so it re-runs on each auth change and
//! can be tested without a router.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use crate::state::auth::User;

/// Where denied visitors are sent.
pub const FALLBACK_PATH: &str = "/";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Authenticated,
    Admin,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Discover,
    CampaignDetail(String),
    CreateCampaign,
    MyCampaigns,
    UserDashboard,
    Admin,
    Analytics,
    ResetPassword,
    VerifyEmail,
    NotFound,
}

impl AppRoute {
    /// Resolve a path (query string and trailing slash ignored).
    #[must_use]
    pub fn match_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Home,
            ["discover"] => Self::Discover,
            ["campaign", id] => Self::CampaignDetail((*id).to_owned()),
            ["create-campaign"] => Self::CreateCampaign,
            ["my-campaigns"] => Self::MyCampaigns,
            ["user-dashboard"] => Self::UserDashboard,
            ["admin"] => Self::Admin,
            ["analytics"] => Self::Analytics,
            ["reset-password"] => Self::ResetPassword,
            ["verify-email"] => Self::VerifyEmail,
            _ => Self::NotFound,
        }
    }

    #[must_use]
    pub fn access(&self) -> RouteAccess {
        match self {
            Self::CreateCampaign | Self::MyCampaigns | Self::UserDashboard | Self::Analytics => {
                RouteAccess::Authenticated
            }
            Self::Admin => RouteAccess::Admin,
            Self::Home
            | Self::Discover
            | Self::CampaignDetail(_)
            | Self::ResetPassword
            | Self::VerifyEmail
            | Self::NotFound => RouteAccess::Public,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    /// Replace the current history entry with this path.
    Redirect(&'static str),
}

#[must_use]
pub fn decide(access: RouteAccess, user: Option<&User>) -> RouteDecision {
    let allowed = match access {
        RouteAccess::Public => true,
        RouteAccess::Authenticated => user.is_some(),
        RouteAccess::Admin => user.is_some_and(|u| u.is_admin),
    };
    if allowed { RouteDecision::Render } else { RouteDecision::Redirect(FALLBACK_PATH) }
}

#[must_use]
pub fn decide_path(path: &str, user: Option<&User>) -> RouteDecision {
    decide(AppRoute::match_path(path).access(), user)
}
