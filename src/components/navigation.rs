//! Top navigation bar.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::{AuthContext, handle_logout};
use crate::state::toast::Toasts;
use crate::state::ui::{AuthTab, UiState};

#[component]
pub fn Navigation() -> impl IntoView {
    let ctx = expect_context::<AuthContext>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<Toasts>>();
    let auth = ctx.state;

    let is_authenticated = move || auth.get().is_authenticated();
    let is_admin = move || auth.get().is_admin();
    let display_name = move || auth.get().user.as_ref().map(crate::state::auth::User::display_name).unwrap_or_default();
    let menu_open = move || ui.get().mobile_menu_open;

    let on_logout = move |_| {
        let ctx = ctx.clone();
        leptos::task::spawn_local(async move {
            handle_logout(&ctx, toasts).await;
        });
    };

    view! {
        <nav class="nav">
            <A href="/" attr:class="nav__brand">"FundAI"</A>
            <button
                class="nav__toggle"
                aria-label="Menu"
                on:click=move |_| ui.update(|u| u.mobile_menu_open = !u.mobile_menu_open)
            >
                "☰"
            </button>
            <div class="nav__links" class:nav__links--open=menu_open>
                <A href="/discover">"Discover"</A>
                <Show when=is_authenticated>
                    <A href="/create-campaign">"Start a Campaign"</A>
                    <A href="/my-campaigns">"My Campaigns"</A>
                    <A href="/user-dashboard">"Dashboard"</A>
                    <A href="/analytics">"Analytics"</A>
                </Show>
                <Show when=is_admin>
                    <A href="/admin">"Admin"</A>
                </Show>
            </div>
            <div class="nav__account">
                <Show
                    when=is_authenticated
                    fallback=move || {
                        view! {
                            <button
                                class="btn"
                                on:click=move |_| ui.update(|u| u.open_auth_modal(AuthTab::Login))
                            >
                                "Log in"
                            </button>
                            <button
                                class="btn btn--primary"
                                on:click=move |_| ui.update(|u| u.open_auth_modal(AuthTab::Register))
                            >
                                "Sign up"
                            </button>
                        }
                    }
                >
                    <button class="btn nav__profile" on:click=move |_| ui.update(UiState::open_profile_modal)>
                        {display_name}
                    </button>
                    <button class="btn" on:click=on_logout.clone()>"Log out"</button>
                </Show>
            </div>
        </nav>
    }
}
