//! HTTP calls against the identity provider's REST API.
//!
//! Client-side (csr): real requests via `gloo-net`.
//! Elsewhere: every call returns [`IdentityError::Unavailable`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::IdentityError;
use super::types::{IdentityUser, Session, SignUpOutcome, parse_signup_response, provider_error_message};

/// Where and how to reach the provider.
#[derive(Clone, Debug)]
pub(super) struct Endpoint {
    pub base_url: String,
    pub anon_key: String,
}

fn token_url(base_url: &str, grant_type: &str) -> String {
    format!("{base_url}/auth/v1/token?grant_type={grant_type}")
}

fn auth_url(base_url: &str, path: &str) -> String {
    format!("{base_url}/auth/v1/{path}")
}

/// Exchange email + password for a session.
pub(super) async fn password_grant(ep: &Endpoint, email: &str, password: &str) -> Result<Session, IdentityError> {
    let body = json!({ "email": email, "password": password });
    let value = post(ep, &token_url(&ep.base_url, "password"), None, &body).await?;
    decode(value)
}

/// Exchange a refresh token for a new session.
pub(super) async fn refresh_grant(ep: &Endpoint, refresh_token: &str) -> Result<Session, IdentityError> {
    let body = json!({ "refresh_token": refresh_token });
    let value = post(ep, &token_url(&ep.base_url, "refresh_token"), None, &body).await?;
    decode(value)
}

/// Create an account; `data` becomes the user's `user_metadata`.
pub(super) async fn signup(
    ep: &Endpoint,
    email: &str,
    password: &str,
    data: &Value,
) -> Result<SignUpOutcome, IdentityError> {
    let body = json!({ "email": email, "password": password, "data": data });
    let value = post(ep, &auth_url(&ep.base_url, "signup"), None, &body).await?;
    parse_signup_response(value).map_err(|e| IdentityError::Decode(e.to_string()))
}

/// Revoke the session server-side.
pub(super) async fn logout(ep: &Endpoint, access_token: &str) -> Result<(), IdentityError> {
    post(ep, &auth_url(&ep.base_url, "logout"), Some(access_token), &Value::Null)
        .await
        .map(|_| ())
}

/// Fetch the user behind `access_token`.
pub(super) async fn fetch_user(ep: &Endpoint, access_token: &str) -> Result<IdentityUser, IdentityError> {
    let value = get(ep, &auth_url(&ep.base_url, "user"), access_token).await?;
    decode(value)
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, IdentityError> {
    serde_json::from_value(value).map_err(|e| IdentityError::Decode(e.to_string()))
}

/// Map a raw provider response to JSON or a typed rejection.
#[cfg(any(test, feature = "csr"))]
fn interpret_response(status: u16, body: &str) -> Result<Value, IdentityError> {
    let parsed = if body.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str::<Value>(body).unwrap_or(Value::Null)
    };
    if (200..300).contains(&status) {
        return Ok(parsed);
    }
    let message = provider_error_message(&parsed)
        .unwrap_or_else(|| format!("identity request failed with status {status}"));
    Err(IdentityError::Rejected { status, message })
}

async fn post(ep: &Endpoint, url: &str, bearer: Option<&str>, body: &Value) -> Result<Value, IdentityError> {
    #[cfg(feature = "csr")]
    {
        let request = authorize(gloo_net::http::Request::post(url), ep, bearer);
        let built = if body.is_null() { request.build() } else { request.json(body) };
        let request = built.map_err(http_error)?;
        let resp = request.send().await.map_err(http_error)?;
        let status = resp.status();
        let text = resp.text().await.map_err(http_error)?;
        interpret_response(status, &text)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ep, url, bearer, body);
        Err(IdentityError::Unavailable)
    }
}

async fn get(ep: &Endpoint, url: &str, bearer: &str) -> Result<Value, IdentityError> {
    #[cfg(feature = "csr")]
    {
        let resp = authorize(gloo_net::http::Request::get(url), ep, Some(bearer))
            .send()
            .await
            .map_err(http_error)?;
        let status = resp.status();
        let text = resp.text().await.map_err(http_error)?;
        interpret_response(status, &text)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ep, url, bearer);
        Err(IdentityError::Unavailable)
    }
}

#[cfg(feature = "csr")]
fn authorize(
    request: gloo_net::http::RequestBuilder,
    ep: &Endpoint,
    bearer: Option<&str>,
) -> gloo_net::http::RequestBuilder {
    let bearer = bearer.unwrap_or(&ep.anon_key);
    request
        .header("apikey", &ep.anon_key)
        .header("Authorization", &format!("Bearer {bearer}"))
}

#[cfg(feature = "csr")]
#[allow(clippy::needless_pass_by_value)]
fn http_error(e: gloo_net::Error) -> IdentityError {
    IdentityError::Http(e.to_string())
}
