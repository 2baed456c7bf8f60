//! Landing page with hero and featured campaigns.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::campaign_card::CampaignCard;
use crate::net::types::Campaign;
use crate::state::auth::AuthContext;
use crate::state::fetch::{Loadable, run_fetch};
use crate::state::toast::Toasts;
use crate::state::ui::{AuthTab, UiState};

/// Campaigns shown under "Featured".
pub const FEATURED_COUNT: usize = 6;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = expect_context::<AuthContext>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<Toasts>>();
    let auth = ctx.state;
    let campaigns = RwSignal::new(Loadable::<Vec<Campaign>>::default());

    let api = ctx.api.clone();
    leptos::task::spawn_local(async move {
        run_fetch(campaigns, toasts, "Failed to load campaigns", api.list_campaigns()).await;
    });

    let featured = move || {
        campaigns.with(|c| c.data.as_deref().unwrap_or_default().iter().take(FEATURED_COUNT).cloned().collect::<Vec<_>>())
    };

    view! {
        <div class="page page--home">
            <section class="hero">
                <h1>"Fund the ideas that matter"</h1>
                <p class="hero__lead">
                    "Launch a campaign in minutes and let AI sharpen your pitch, predict your odds, and plan your outreach."
                </p>
                <div class="hero__actions">
                    <A href="/discover" attr:class="btn">"Explore Campaigns"</A>
                    <Show
                        when=move || auth.get().is_authenticated()
                        fallback=move || {
                            view! {
                                <button
                                    class="btn btn--primary"
                                    on:click=move |_| ui.update(|u| u.open_auth_modal(AuthTab::Register))
                                >
                                    "Start a Campaign"
                                </button>
                            }
                        }
                    >
                        <A href="/create-campaign" attr:class="btn btn--primary">"Start a Campaign"</A>
                    </Show>
                </div>
            </section>

            <section class="featured">
                <h2>"Featured Campaigns"</h2>
                <Show
                    when=move || !campaigns.get().is_pending()
                    fallback=|| view! { <div class="spinner" aria-label="Loading"></div> }
                >
                    <Show
                        when=move || !featured().is_empty()
                        fallback=|| view! { <p class="muted">"No campaigns yet. Be the first to launch one."</p> }
                    >
                        <div class="campaign-grid">
                            {move || {
                                featured()
                                    .into_iter()
                                    .map(|campaign| view! { <CampaignCard campaign=campaign /> })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                </Show>
            </section>
        </div>
    }
}
