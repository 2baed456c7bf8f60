//! Wire types for the hosted identity provider.
//!
//! DESIGN
//! ======
//! These mirror the GoTrue REST payloads closely enough that a persisted
//! session round-trips through `localStorage` without loss. Unknown
//! `app_metadata` keys are kept in `extra`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// An authenticated session issued by the identity provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Lifetime in seconds at the time of issue.
    #[serde(default)]
    pub expires_in: i64,
    /// Absolute expiry in unix seconds.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: IdentityUser,
}

impl Session {
    /// Fill `expires_at` from `expires_in` when the provider omitted it.
    #[must_use]
    pub fn with_expiry_from(mut self, now_secs: i64) -> Self {
        if self.expires_at.is_none() {
            self.expires_at = Some(now_secs.saturating_add(self.expires_in));
        }
        self
    }

    /// Whether the access token expires within `margin_secs` of `now_secs`.
    /// Sessions without a known expiry never count as expiring.
    #[must_use]
    pub fn expires_within(&self, now_secs: i64, margin_secs: i64) -> bool {
        self.expires_at.is_some_and(|at| at.saturating_sub(now_secs) <= margin_secs)
    }
}

/// The provider's user record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentityUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "deserialize_map_or_null")]
    pub user_metadata: Map<String, Value>,
    #[serde(default, deserialize_with = "deserialize_app_metadata_or_null")]
    pub app_metadata: AppMetadata,
    #[serde(default)]
    pub email_confirmed_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Server-controlled metadata. Only administrators can write it, which is
/// why the admin flag lives here rather than in `user_metadata`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_lenient_bool")]
    pub is_admin: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of a sign-up request.
#[derive(Clone, Debug, PartialEq)]
pub enum SignUpOutcome {
    /// The account exists but the email must be confirmed first.
    PendingVerification { user_id: String, email: Option<String> },
    /// The project auto-confirms accounts and issued a session immediately.
    SignedIn(Session),
}

/// Interpret a `/signup` response body.
///
/// GoTrue answers with a full session when auto-confirm is on, and with the
/// bare user (or `{ "user": .. }`) when email confirmation is pending.
///
/// # Errors
///
/// Returns a decode error when the body matches neither shape.
pub fn parse_signup_response(body: Value) -> Result<SignUpOutcome, serde_json::Error> {
    if body.get("access_token").is_some() {
        return serde_json::from_value::<Session>(body).map(SignUpOutcome::SignedIn);
    }
    let user_value = match body.get("user") {
        Some(user) if user.is_object() => user.clone(),
        _ => body,
    };
    let user: IdentityUser = serde_json::from_value(user_value)?;
    Ok(SignUpOutcome::PendingVerification { user_id: user.id, email: user.email })
}

/// Pull a human-readable message out of a provider error body.
#[must_use]
pub fn provider_error_message(body: &Value) -> Option<String> {
    ["error_description", "msg", "message", "error"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::to_owned)
        .filter(|msg| !msg.is_empty())
}

fn deserialize_lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        Some(Value::Number(n)) => n.as_i64().map(|v| v != 0),
        _ => None,
    })
}

fn deserialize_map_or_null<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_app_metadata_or_null<'de, D>(deserializer: D) -> Result<AppMetadata, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<AppMetadata>::deserialize(deserializer)?.unwrap_or_default())
}
