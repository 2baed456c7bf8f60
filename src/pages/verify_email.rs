//! Email verification landing page.
//!
//! Reads `?token=` once and reports the backend's answer. A 400 means the
//! link expired; any other failure shows the backend detail when present.

#[cfg(test)]
#[path = "verify_email_test.rs"]
mod verify_email_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::net::api::ApiError;
use crate::state::auth::AuthContext;

pub(crate) const INVALID_LINK: &str = "Invalid verification link";
pub(crate) const EXPIRED_LINK: &str = "Verification link has expired";
pub(crate) const VERIFICATION_FAILED: &str = "Verification failed";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyStatus {
    Loading,
    Success(String),
    Failed(String),
}

/// Message for a failed verification call.
pub(crate) fn failure_message(error: &ApiError) -> String {
    if error.status() == Some(400) {
        return EXPIRED_LINK.to_owned();
    }
    error.user_message(VERIFICATION_FAILED)
}

/// A token is usable when present and not blank.
pub(crate) fn usable_token(raw: Option<String>) -> Option<String> {
    raw.filter(|t| !t.trim().is_empty())
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let ctx = expect_context::<AuthContext>();
    let query = use_query_map();
    let status = RwSignal::new(VerifyStatus::Loading);

    match usable_token(query.with_untracked(|q| q.get("token"))) {
        None => status.set(VerifyStatus::Failed(INVALID_LINK.to_owned())),
        Some(token) => {
            let api = ctx.api.clone();
            leptos::task::spawn_local(async move {
                let next = match api.verify_email(&token).await {
                    Ok(response) => VerifyStatus::Success(response.message),
                    Err(e) => {
                        leptos::logging::warn!("verify email: {e}");
                        VerifyStatus::Failed(failure_message(&e))
                    }
                };
                status.try_set(next);
            });
        }
    }

    view! {
        <div class="page page--narrow">
            <div class="card card--center">
                {move || match status.get() {
                    VerifyStatus::Loading => {
                        view! {
                            <div class="spinner" aria-hidden="true"></div>
                            <h2>"Verifying your email..."</h2>
                            <p class="muted">"Please wait while we verify your email address."</p>
                        }
                            .into_any()
                    }
                    VerifyStatus::Success(message) => {
                        view! {
                            <h2>"Email Verified!"</h2>
                            <p class="muted">{message}</p>
                            <A href="/" attr:class="btn btn--primary">"Go to Homepage"</A>
                        }
                            .into_any()
                    }
                    VerifyStatus::Failed(message) => {
                        view! {
                            <h2>"Verification Failed"</h2>
                            <p class="muted">{message}</p>
                            <A href="/" attr:class="btn btn--primary">"Go to Homepage"</A>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
