//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity client owns the session; this module mirrors it into a
//! signal that route guards and user-aware components read. Two writers feed
//! the signal: the startup `check_auth` pass and the session-change
//! listener. Both derive the user through [`user_from_session`], so for a
//! given session they write the same value and the last write wins.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use serde_json::{Map, Value};

use crate::identity::{AppMetadata, AuthEvent, IdentityClient, IdentityError, Session, Subscription};
use crate::net::api::ApiClient;
use crate::state::toast::{ToastKind, Toasts, notify};

/// The signed-in user as the UI sees it.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    /// Display name from `user_metadata.name`.
    pub name: Option<String>,
    /// Avatar URL from `user_metadata.picture` (or `avatar_url`).
    pub picture: Option<String>,
    /// Derived from `app_metadata.is_admin`; absent means `false`.
    pub is_admin: bool,
    pub user_metadata: Map<String, Value>,
    pub app_metadata: AppMetadata,
    pub created_at: Option<String>,
}

impl User {
    /// Name, else email, else `"me"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| "me".to_owned())
    }

    /// Metadata string field, `None` when missing or empty.
    #[must_use]
    pub fn metadata_str(&self, key: &str) -> Option<String> {
        metadata_string(&self.user_metadata, key)
    }
}

fn metadata_string(metadata: &Map<String, Value>, key: &str) -> Option<String> {
    metadata
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Overlay the admin flag and profile fields onto the session's user.
#[must_use]
pub fn user_from_session(session: &Session) -> User {
    let identity = &session.user;
    let meta_str = |key: &str| metadata_string(&identity.user_metadata, key);
    User {
        id: identity.id.clone(),
        email: identity.email.clone(),
        name: meta_str("name").or_else(|| meta_str("full_name")),
        picture: meta_str("picture").or_else(|| meta_str("avatar_url")),
        is_admin: identity.app_metadata.is_admin.unwrap_or(false),
        user_metadata: identity.user_metadata.clone(),
        app_metadata: identity.app_metadata.clone(),
        created_at: identity.created_at.clone(),
    }
}

/// Authentication state tracking the current user and startup loading.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True until the startup session check settles. Never set back.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }

    /// Apply the outcome of a session check. A failed check leaves the user
    /// untouched. Returns `true` when this call ended the startup phase.
    pub fn apply_check(&mut self, result: &Result<Option<Session>, IdentityError>) -> bool {
        match result {
            Ok(Some(session)) => self.user = Some(user_from_session(session)),
            Ok(None) => self.user = None,
            Err(_) => {}
        }
        let was_loading = self.loading;
        self.loading = false;
        was_loading
    }

    /// React to a session-change event. Returns `true` if the user changed.
    pub fn apply_session_event(&mut self, event: &AuthEvent, session: Option<&Session>) -> bool {
        let next = match (event, session) {
            (AuthEvent::SignedIn, Some(session)) => Some(user_from_session(session)),
            (AuthEvent::SignedOut, _) => None,
            _ => return false,
        };
        let changed = self.user != next;
        self.user = next;
        changed
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }
}

/// Everything components need to talk to auth and the backend.
#[derive(Clone)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
    pub identity: IdentityClient,
    pub api: ApiClient,
}

impl AuthContext {
    #[must_use]
    pub fn new(identity: IdentityClient, api: ApiClient) -> Self {
        Self { state: RwSignal::new(AuthState::default()), identity, api }
    }
}

/// Restore the session and end the startup phase. Safe to re-run after an
/// in-modal login.
pub async fn check_auth(ctx: &AuthContext) {
    let result = ctx.identity.get_session().await;
    if let Err(e) = &result {
        leptos::logging::log!("not authenticated: {e}");
    }
    ctx.state.try_update(|s| s.apply_check(&result));
}

/// Mirror identity session changes into the auth signal. Drop or
/// `unsubscribe()` the returned handle on teardown.
pub fn install_session_listener(ctx: &AuthContext) -> Subscription {
    let state = ctx.state;
    ctx.identity.on_session_change(move |event, session| {
        state.try_update(|s| s.apply_session_event(event, session));
    })
}

/// Sign out, notify, and reload at `/`. The reload drops any per-page state
/// the signed-in user had loaded.
pub async fn handle_logout(ctx: &AuthContext, toasts: RwSignal<Toasts>) {
    ctx.identity.sign_out().await;
    ctx.state.try_update(AuthState::sign_out);
    notify(toasts, ToastKind::Success, "Logged out successfully");
    crate::util::browser::hard_navigate("/");
}
