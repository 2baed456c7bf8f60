//! REST client for the FundAI backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Elsewhere: every call returns [`ApiError::Unavailable`], so pages compile
//! and their pure helpers stay testable on the host.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Status`] carrying the backend's
//! `detail` text when present. Nothing here retries or times out; a retry is
//! always a user action.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::types::{
    AdminStats, AdminUser, AiCampaignBrief, Campaign, EnhancedDescription, MarketingStrategyResponse, MessageResponse,
    MonteCarloResult, NewCampaign, ProfileUpdate, SuccessPredictionResponse, TitleSuggestions,
};
use crate::config::AppConfig;
use crate::identity::IdentityClient;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(String),
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
    #[error("not authenticated")]
    NotAuthenticated,
}

impl ApiError {
    /// The backend's `detail` text when it sent one, else `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { detail: Some(detail), .. } => detail.clone(),
            _ => fallback.to_owned(),
        }
    }

    /// HTTP status for [`ApiError::Status`].
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Whether a call may go out without a bearer token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Auth {
    Optional,
    Required,
}

/// Backend client. Attaches the current session's bearer token to every
/// request when one exists.
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    identity: IdentityClient,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: &AppConfig, identity: IdentityClient) -> Self {
        Self { base: config.api_base(), identity }
    }

    /// Absolute URL for an API path such as `/campaigns`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    // ---------------------------------------------------------------
    // Campaigns
    // ---------------------------------------------------------------

    /// `GET /campaigns`
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport, status, or decode failures.
    pub async fn list_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
        self.get_json("/campaigns").await
    }

    /// `GET /campaigns/{id}`
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport, status, or decode failures.
    pub async fn get_campaign(&self, id: &str) -> Result<Campaign, ApiError> {
        self.get_json(&campaign_path(id)).await
    }

    /// `POST /campaigns/extended`
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport, status, or decode failures.
    pub async fn create_campaign(&self, campaign: &NewCampaign) -> Result<Campaign, ApiError> {
        self.post_json("/campaigns/extended", campaign).await
    }

    /// `DELETE /campaigns/{id}`
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport or status failures.
    pub async fn delete_campaign(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&campaign_path(id)).await
    }

    /// `GET /my-campaigns`
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport, status, or decode failures.
    pub async fn my_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
        self.get_json("/my-campaigns").await
    }

    // ---------------------------------------------------------------
    // Admin (session required before the request goes out)
    // ---------------------------------------------------------------

    /// `GET /admin/campaigns`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotAuthenticated`] without a session, otherwise
    /// transport, status, or decode failures.
    pub async fn admin_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
        self.request_json(Method::Get, "/admin/campaigns", None, Auth::Required).await
    }

    /// `GET /admin/users`
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::admin_campaigns`].
    pub async fn admin_users(&self) -> Result<Vec<AdminUser>, ApiError> {
        self.request_json(Method::Get, "/admin/users", None, Auth::Required).await
    }

    /// `GET /admin/stats`
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::admin_campaigns`].
    pub async fn admin_stats(&self) -> Result<AdminStats, ApiError> {
        self.request_json(Method::Get, "/admin/stats", None, Auth::Required).await
    }

    // ---------------------------------------------------------------
    // Analytics + AI
    // ---------------------------------------------------------------

    /// `GET /analytics/monte-carlo/{id}`
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport, status, or decode failures.
    pub async fn monte_carlo(&self, campaign_id: &str) -> Result<MonteCarloResult, ApiError> {
        self.get_json(&monte_carlo_path(campaign_id)).await
    }

    /// `POST /ai/optimize-title`
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport, status, or decode failures.
    pub async fn optimize_title(&self, brief: &AiCampaignBrief) -> Result<TitleSuggestions, ApiError> {
        self.post_json("/ai/optimize-title", brief).await
    }

    /// `POST /ai/enhance-description`
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport, status, or decode failures.
    pub async fn enhance_description(&self, brief: &AiCampaignBrief) -> Result<EnhancedDescription, ApiError> {
        self.post_json("/ai/enhance-description", brief).await
    }

    /// `POST /ai/success-prediction`
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport, status, or decode failures.
    pub async fn success_prediction(&self, brief: &AiCampaignBrief) -> Result<SuccessPredictionResponse, ApiError> {
        self.post_json("/ai/success-prediction", brief).await
    }

    /// `POST /ai/marketing-strategy`
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport, status, or decode failures.
    pub async fn marketing_strategy(&self, brief: &AiCampaignBrief) -> Result<MarketingStrategyResponse, ApiError> {
        self.post_json("/ai/marketing-strategy", brief).await
    }

    // ---------------------------------------------------------------
    // Account
    // ---------------------------------------------------------------

    /// `POST /auth/reset-password`
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport or status failures.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        let body = serde_json::json!({ "email": email });
        self.post_json::<_, Value>("/auth/reset-password", &body).await.map(|_| ())
    }

    /// `GET /auth/verify-email?token=..`
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`]; an expired token surfaces as status 400.
    pub async fn verify_email(&self, token: &str) -> Result<MessageResponse, ApiError> {
        self.get_json(&verify_email_path(token)).await
    }

    /// `PUT /auth/update-profile`
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport or status failures.
    pub async fn update_profile(&self, profile: &ProfileUpdate) -> Result<(), ApiError> {
        self.put_json::<_, Value>("/auth/update-profile", profile).await.map(|_| ())
    }

    /// `POST /upload-avatar` as multipart field `file`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport or status failures.
    #[cfg(feature = "csr")]
    pub async fn upload_avatar(&self, file: &web_sys::File) -> Result<Value, ApiError> {
        let form = web_sys::FormData::new().map_err(|e| ApiError::Http(format!("{e:?}")))?;
        form.append_with_blob("file", file)
            .map_err(|e| ApiError::Http(format!("{e:?}")))?;
        self.post_multipart("/upload-avatar", form).await
    }

    // ---------------------------------------------------------------
    // Generic helpers
    // ---------------------------------------------------------------

    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport, status, or decode failures.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request_json(Method::Get, path, None, Auth::Optional).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] for encode, transport, status, or decode failures.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let body = encode_body(body)?;
        self.request_json(Method::Post, path, Some(body), Auth::Optional).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] for encode, transport, status, or decode failures.
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let body = encode_body(body)?;
        self.request_json(Method::Put, path, Some(body), Auth::Optional).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport or status failures.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::Delete, path, None, Auth::Optional).await.map(|_| ())
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport, status, or decode failures.
    #[cfg(feature = "csr")]
    pub async fn post_multipart(&self, path: &str, form: web_sys::FormData) -> Result<Value, ApiError> {
        let token = self.bearer(Auth::Optional).await?;
        let mut request = gloo_net::http::Request::post(&self.url(path));
        if let Some(token) = token {
            request = request.header("Authorization", &format!("Bearer {token}"));
        }
        let resp = request
            .body(form)
            .map_err(http_error)?
            .send()
            .await
            .map_err(http_error)?;
        let status = resp.status();
        let text = resp.text().await.map_err(http_error)?;
        decode_body(&interpret_status(status, text)?)
    }

    async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        auth: Auth,
    ) -> Result<T, ApiError> {
        let text = self.send(method, path, body, auth).await?;
        decode_body(&text)
    }

    /// Current bearer token, refreshed by the identity client when due.
    async fn bearer(&self, auth: Auth) -> Result<Option<String>, ApiError> {
        let token = match self.identity.get_session().await {
            Ok(session) => session.map(|s| s.access_token),
            Err(e) => {
                leptos::logging::warn!("session lookup failed: {e}");
                self.identity.access_token()
            }
        };
        if token.is_none() && auth == Auth::Required {
            return Err(ApiError::NotAuthenticated);
        }
        Ok(token)
    }

    async fn send(&self, method: Method, path: &str, body: Option<String>, auth: Auth) -> Result<String, ApiError> {
        let token = self.bearer(auth).await?;
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let url = self.url(path);
            let mut request = match method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Delete => Request::delete(&url),
            };
            if let Some(token) = token {
                request = request.header("Authorization", &format!("Bearer {token}"));
            }
            let request = match body {
                Some(body) => request.header("Content-Type", "application/json").body(body),
                None => request.build(),
            }
            .map_err(http_error)?;
            let resp = request.send().await.map_err(http_error)?;
            let status = resp.status();
            let text = resp.text().await.map_err(http_error)?;
            interpret_status(status, text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, path, body, token);
            Err(ApiError::Unavailable)
        }
    }
}

pub(crate) fn campaign_path(id: &str) -> String {
    format!("/campaigns/{}", encode_segment(id))
}

pub(crate) fn monte_carlo_path(campaign_id: &str) -> String {
    format!("/analytics/monte-carlo/{}", encode_segment(campaign_id))
}

/// Percent-encode one path segment. `byte_serialize` writes spaces as `+`
/// and escapes a literal `+`, so every `+` it emits is a space.
fn encode_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

pub(crate) fn verify_email_path(token: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(token.as_bytes()).collect();
    format!("/auth/verify-email?token={encoded}")
}

fn encode_body<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a JSON body; an empty body decodes as `null`.
fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Map a response status and body to the body text or a typed error.
#[cfg(any(test, feature = "csr"))]
fn interpret_status(status: u16, body: String) -> Result<String, ApiError> {
    if (200..300).contains(&status) {
        return Ok(body);
    }
    Err(ApiError::Status { status, detail: error_detail(&body) })
}

/// Extract FastAPI's `detail`: either a string or a list of
/// `{ "msg": .. }` validation errors.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

#[cfg(feature = "csr")]
#[allow(clippy::needless_pass_by_value)]
fn http_error(e: gloo_net::Error) -> ApiError {
    ApiError::Http(e.to_string())
}
