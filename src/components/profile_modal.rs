//! Profile editor for the signed-in user.

use leptos::prelude::*;

use crate::net::types::ProfileUpdate;
use crate::state::auth::{AuthContext, User, check_auth};
use crate::state::toast::{ToastKind, Toasts, notify};
use crate::state::ui::UiState;

/// Prefill the form from the current user's metadata.
fn profile_from_user(user: Option<&User>) -> ProfileUpdate {
    user.map_or_else(ProfileUpdate::default, |u| ProfileUpdate {
        name: u.name.clone().unwrap_or_default(),
        email: u.email.clone().unwrap_or_default(),
        phone: u.metadata_str("phone").unwrap_or_default(),
        location: u.metadata_str("location").unwrap_or_default(),
        bio: u.metadata_str("bio").unwrap_or_default(),
    })
}

#[component]
pub fn ProfileModal() -> impl IntoView {
    let ctx = expect_context::<AuthContext>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<Toasts>>();

    let initial = profile_from_user(ctx.state.get_untracked().user.as_ref());
    let name = RwSignal::new(initial.name);
    let email = RwSignal::new(initial.email);
    let phone = RwSignal::new(initial.phone);
    let location = RwSignal::new(initial.location);
    let bio = RwSignal::new(initial.bio);
    let saving = RwSignal::new(false);
    let uploading = RwSignal::new(false);

    let auth = ctx.state;
    let picture = move || auth.get().user.and_then(|u| u.picture);
    let close = move || ui.update(UiState::close_profile_modal);

    let on_save = {
        let ctx = ctx.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if saving.get() {
                return;
            }
            let profile = ProfileUpdate {
                name: name.get().trim().to_owned(),
                email: email.get().trim().to_owned(),
                phone: phone.get(),
                location: location.get(),
                bio: bio.get(),
            };
            saving.set(true);
            let ctx = ctx.clone();
            leptos::task::spawn_local(async move {
                match ctx.api.update_profile(&profile).await {
                    Ok(()) => {
                        notify(toasts, ToastKind::Success, "Profile updated");
                        ui.try_update(UiState::close_profile_modal);
                        check_auth(&ctx).await;
                    }
                    Err(e) => notify(toasts, ToastKind::Error, e.user_message("Failed to update profile")),
                }
                saving.try_set(false);
            });
        }
    };

    let on_avatar = {
        let ctx = ctx.clone();
        move |ev: leptos::ev::Event| {
            #[cfg(feature = "csr")]
            {
                use wasm_bindgen::JsCast;

                let Some(file) = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                    .and_then(|input| input.files())
                    .and_then(|files| files.get(0))
                else {
                    return;
                };
                uploading.set(true);
                let ctx = ctx.clone();
                leptos::task::spawn_local(async move {
                    match ctx.api.upload_avatar(&file).await {
                        Ok(_) => {
                            notify(toasts, ToastKind::Success, "Profile picture updated");
                            check_auth(&ctx).await;
                        }
                        Err(e) => notify(toasts, ToastKind::Error, e.user_message("Failed to upload picture")),
                    }
                    uploading.try_set(false);
                });
            }
            #[cfg(not(feature = "csr"))]
            let _ = (ev, &ctx);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div class="dialog dialog--profile" on:click=move |ev| ev.stop_propagation()>
                <h2>"Your Profile"</h2>

                <div class="dialog__avatar">
                    {move || match picture() {
                        Some(src) => view! { <img class="avatar avatar--large" src=src alt="" /> }.into_any(),
                        None => view! { <div class="avatar avatar--large avatar--empty"></div> }.into_any(),
                    }}
                    <label class="btn">
                        {move || if uploading.get() { "Uploading…" } else { "Change picture" }}
                        <input class="visually-hidden" type="file" accept="image/*" on:change=on_avatar />
                    </label>
                </div>

                <form class="dialog__form" on:submit=on_save>
                    <label class="dialog__label">
                        "Name"
                        <input
                            class="dialog__input"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Email"
                        <input
                            class="dialog__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Phone"
                        <input
                            class="dialog__input"
                            type="tel"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Location"
                        <input
                            class="dialog__input"
                            prop:value=move || location.get()
                            on:input=move |ev| location.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Bio"
                        <textarea
                            class="dialog__input"
                            rows="3"
                            prop:value=move || bio.get()
                            on:input=move |ev| bio.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| close()>"Cancel"</button>
                        <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving…" } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
