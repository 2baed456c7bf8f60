//! Startup configuration for the backend API and the identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! A WASM bundle has no process environment, so settings are embedded at
//! build time from `FUNDAI_*` variables and read once when the app mounts.
//! There is no hot reload.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const BACKEND_URL_VAR: &str = "FUNDAI_BACKEND_URL";
pub const IDENTITY_URL_VAR: &str = "FUNDAI_IDENTITY_URL";
pub const IDENTITY_ANON_KEY_VAR: &str = "FUNDAI_IDENTITY_ANON_KEY";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Endpoints and public credentials the client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend origin without trailing slash. Empty means same-origin.
    pub backend_url: String,
    /// Identity provider origin without trailing slash.
    pub identity_url: String,
    /// Public (anonymous) identity provider key.
    pub identity_anon_key: String,
}

impl AppConfig {
    /// Build config from the variables embedded at compile time.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the identity provider settings are
    /// missing or a URL is malformed.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(build_env)
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// Required:
    /// - `FUNDAI_IDENTITY_URL`
    /// - `FUNDAI_IDENTITY_ANON_KEY`
    ///
    /// Optional:
    /// - `FUNDAI_BACKEND_URL`: same origin when absent
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for missing required keys or non-HTTP URLs.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend_url = match non_empty(lookup(BACKEND_URL_VAR)) {
            Some(raw) => parse_url(BACKEND_URL_VAR, &raw)?,
            None => String::new(),
        };
        let identity_raw = non_empty(lookup(IDENTITY_URL_VAR)).ok_or(ConfigError::Missing(IDENTITY_URL_VAR))?;
        let identity_url = parse_url(IDENTITY_URL_VAR, &identity_raw)?;
        let identity_anon_key =
            non_empty(lookup(IDENTITY_ANON_KEY_VAR)).ok_or(ConfigError::Missing(IDENTITY_ANON_KEY_VAR))?;

        Ok(Self { backend_url, identity_url, identity_anon_key })
    }

    /// Base path for every backend request: `<backend_url>/api`.
    #[must_use]
    pub fn api_base(&self) -> String {
        format!("{}/api", self.backend_url)
    }

    /// First host label of the identity URL, used to namespace storage keys.
    #[must_use]
    pub fn identity_project_ref(&self) -> String {
        let without_scheme = self
            .identity_url
            .split_once("://")
            .map_or(self.identity_url.as_str(), |(_, rest)| rest);
        without_scheme
            .split(['.', ':', '/'])
            .next()
            .unwrap_or_default()
            .to_owned()
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_url(var: &'static str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::Invalid { var, reason: format!("expected an http(s) URL, got '{raw}'") });
    }
    Ok(trimmed.to_owned())
}

fn build_env(key: &str) -> Option<String> {
    let raw = match key {
        BACKEND_URL_VAR => option_env!("FUNDAI_BACKEND_URL"),
        IDENTITY_URL_VAR => option_env!("FUNDAI_IDENTITY_URL"),
        IDENTITY_ANON_KEY_VAR => option_env!("FUNDAI_IDENTITY_ANON_KEY"),
        _ => None,
    };
    raw.map(str::to_owned)
}
