//! Login / register modal.
//!
//! Login signs in against the identity provider, then re-runs the session
//! check so the auth signal reflects the new user even if the change event
//! raced the modal closing. Registration leaves the visitor signed out until
//! they confirm their email.

#[cfg(test)]
#[path = "auth_modal_test.rs"]
mod auth_modal_test;

use leptos::prelude::*;

use crate::identity::SignUpOutcome;
use crate::state::auth::{AuthContext, check_auth};
use crate::state::toast::{ToastKind, Toasts, notify};
use crate::state::ui::{AuthTab, UiState};

pub(crate) const MIN_PASSWORD_LEN: usize = 6;

/// Trim and check login input.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    /// `user_metadata` sent with the sign-up request.
    pub(crate) fn metadata(&self) -> serde_json::Value {
        serde_json::json!({ "name": self.name })
    }
}

pub(crate) fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<Registration, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in every field.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(Registration { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn AuthModal() -> impl IntoView {
    let ctx = expect_context::<AuthContext>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<Toasts>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let tab = move || ui.get().auth_tab;
    let close = move || ui.update(UiState::close_auth_modal);
    let switch_tab = move |next: AuthTab| {
        error.set(None);
        ui.update(|u| u.auth_tab = next);
    };

    let submit_login = {
        let ctx = ctx.clone();
        move || {
            let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
                Ok(input) => input,
                Err(message) => {
                    error.set(Some(message.to_owned()));
                    return;
                }
            };
            busy.set(true);
            error.set(None);
            let ctx = ctx.clone();
            leptos::task::spawn_local(async move {
                match ctx.identity.sign_in_with_password(&email_value, &password_value).await {
                    Ok(_) => {
                        notify(toasts, ToastKind::Success, "Welcome back!");
                        password.try_set(String::new());
                        ui.try_update(UiState::close_auth_modal);
                        check_auth(&ctx).await;
                    }
                    Err(e) => {
                        leptos::logging::warn!("sign in failed: {e}");
                        error.try_set(Some(e.to_string()));
                        notify(toasts, ToastKind::Error, "Login failed");
                    }
                }
                busy.try_set(false);
            });
        }
    };

    let submit_register = {
        let ctx = ctx.clone();
        move || {
            let registration = match validate_register_input(&name.get(), &email.get(), &password.get(), &confirm.get()) {
                Ok(registration) => registration,
                Err(message) => {
                    error.set(Some(message.to_owned()));
                    return;
                }
            };
            busy.set(true);
            error.set(None);
            let ctx = ctx.clone();
            leptos::task::spawn_local(async move {
                let result = ctx
                    .identity
                    .sign_up(&registration.email, &registration.password, registration.metadata())
                    .await;
                match result {
                    Ok(SignUpOutcome::PendingVerification { .. }) => {
                        notify(
                            toasts,
                            ToastKind::Success,
                            "Account created! Please check your email to verify your account.",
                        );
                        ui.try_update(UiState::close_auth_modal);
                    }
                    Ok(SignUpOutcome::SignedIn(_)) => {
                        notify(toasts, ToastKind::Success, "Account created!");
                        ui.try_update(UiState::close_auth_modal);
                        check_auth(&ctx).await;
                    }
                    Err(e) => {
                        leptos::logging::warn!("sign up failed: {e}");
                        error.try_set(Some(e.to_string()));
                        notify(toasts, ToastKind::Error, "Registration failed");
                    }
                }
                busy.try_set(false);
            });
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match tab() {
            AuthTab::Login => submit_login(),
            AuthTab::Register => submit_register(),
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div class="dialog dialog--auth" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__tabs">
                    <button
                        class="dialog__tab"
                        class:dialog__tab--active=move || tab() == AuthTab::Login
                        on:click=move |_| switch_tab(AuthTab::Login)
                    >
                        "Log in"
                    </button>
                    <button
                        class="dialog__tab"
                        class:dialog__tab--active=move || tab() == AuthTab::Register
                        on:click=move |_| switch_tab(AuthTab::Register)
                    >
                        "Sign up"
                    </button>
                </div>

                <form class="dialog__form" on:submit=on_submit>
                    <Show when=move || tab() == AuthTab::Register>
                        <label class="dialog__label">
                            "Full name"
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>
                    <label class="dialog__label">
                        "Email"
                        <input
                            class="dialog__input"
                            type="email"
                            autocomplete="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Password"
                        <input
                            class="dialog__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || tab() == AuthTab::Register>
                        <label class="dialog__label">
                            "Confirm password"
                            <input
                                class="dialog__input"
                                type="password"
                                prop:value=move || confirm.get()
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>
                    <Show when=move || tab() == AuthTab::Login>
                        <a class="dialog__link" href="/reset-password" on:click=move |_| close()>
                            "Forgot password?"
                        </a>
                    </Show>

                    {move || error.get().map(|message| view! { <p class="dialog__error">{message}</p> })}

                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| close()>"Cancel"</button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || match (busy.get(), tab()) {
                                (true, _) => "Please wait…",
                                (false, AuthTab::Login) => "Log in",
                                (false, AuthTab::Register) => "Create account",
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
