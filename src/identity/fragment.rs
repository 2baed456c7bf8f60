//! Session detection in the URL fragment.
//!
//! Email confirmation and password-recovery links land on the app with the
//! tokens in the fragment:
//! `#access_token=..&refresh_token=..&expires_in=3600&token_type=bearer&type=signup`.
//! Failed links carry `error` / `error_description` instead.

#[cfg(test)]
#[path = "fragment_test.rs"]
mod fragment_test;

use super::types::{IdentityUser, Session};

/// Tokens parsed from a redirect fragment, before the user is fetched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FragmentTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub expires_at: Option<i64>,
    /// Link purpose (`signup`, `recovery`, `magiclink`, ...).
    pub kind: Option<String>,
}

impl FragmentTokens {
    #[must_use]
    pub fn is_recovery(&self) -> bool {
        self.kind.as_deref() == Some("recovery")
    }

    /// Combine with the fetched user into a full session.
    #[must_use]
    pub fn into_session(self, user: IdentityUser, now_secs: i64) -> Session {
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            token_type: self.token_type,
            expires_in: self.expires_in,
            expires_at: self.expires_at,
            user,
        }
        .with_expiry_from(now_secs)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FragmentOutcome {
    Tokens(FragmentTokens),
    /// The provider redirected with an error description.
    Error(String),
}

/// Parse a `location.hash` value. Returns `None` when the fragment carries no
/// auth payload, leaving ordinary in-page anchors alone.
#[must_use]
pub fn parse_session_fragment(hash: &str) -> Option<FragmentOutcome> {
    let raw = hash.strip_prefix('#').unwrap_or(hash);
    if raw.is_empty() {
        return None;
    }

    let mut access_token = None;
    let mut refresh_token = None;
    let mut token_type = None;
    let mut expires_in = None;
    let mut expires_at = None;
    let mut kind = None;
    let mut error = None;
    let mut error_description = None;

    for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
        let value = value.into_owned();
        match key.as_ref() {
            "access_token" => access_token = Some(value),
            "refresh_token" => refresh_token = Some(value),
            "token_type" => token_type = Some(value),
            "expires_in" => expires_in = value.parse::<i64>().ok(),
            "expires_at" => expires_at = value.parse::<i64>().ok(),
            "type" => kind = Some(value),
            "error" => error = Some(value),
            "error_description" => error_description = Some(value),
            _ => {}
        }
    }

    if let Some(message) = error_description.or(error) {
        return Some(FragmentOutcome::Error(message));
    }

    Some(FragmentOutcome::Tokens(FragmentTokens {
        access_token: access_token?,
        refresh_token: refresh_token?,
        token_type: token_type.unwrap_or_else(|| "bearer".to_owned()),
        expires_in: expires_in.unwrap_or_default(),
        expires_at,
        kind,
    }))
}
