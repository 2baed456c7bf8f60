//! Request a password reset link.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthContext;
use crate::state::toast::{ToastKind, Toasts, notify};

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let ctx = expect_context::<AuthContext>();
    let toasts = expect_context::<RwSignal<Toasts>>();
    let email = RwSignal::new(String::new());
    let sending = RwSignal::new(false);
    let sent_to = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let address = email.get().trim().to_owned();
        if address.is_empty() || sending.get() {
            return;
        }
        sending.set(true);
        let api = ctx.api.clone();
        leptos::task::spawn_local(async move {
            match api.request_password_reset(&address).await {
                Ok(()) => {
                    notify(toasts, ToastKind::Success, "Password reset link sent! Please check your email.");
                    sent_to.try_set(Some(address));
                }
                Err(e) => notify(toasts, ToastKind::Error, e.user_message("Failed to send reset link.")),
            }
            sending.try_set(false);
        });
    };

    view! {
        <div class="page page--narrow">
            <h1>"Reset your password"</h1>
            <Show
                when=move || sent_to.get().is_some()
                fallback=move || {
                    view! {
                        <p class="muted">"Enter your email and we'll send you a link to reset your password."</p>
                        <form class="card" on:submit=on_submit.clone()>
                            <label class="field">
                                "Email"
                                <input
                                    class="field__input"
                                    type="email"
                                    required
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                            </label>
                            <button class="btn btn--primary" type="submit" disabled=move || sending.get()>
                                {move || if sending.get() { "Sending..." } else { "Send Reset Link" }}
                            </button>
                        </form>
                    }
                }
            >
                <div class="card card--center">
                    <h2>"Check your email"</h2>
                    <p class="muted">
                        "We've sent a password reset link to "<strong>{move || sent_to.get().unwrap_or_default()}</strong>
                    </p>
                    <A href="/" attr:class="btn btn--primary">"Back to Home"</A>
                </div>
            </Show>
        </div>
    }
}
