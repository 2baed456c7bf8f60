//! Campaign analytics and the Monte Carlo simulator.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::monte_carlo::MonteCarloSimulator;
use crate::net::types::Campaign;
use crate::state::auth::AuthContext;
use crate::state::fetch::{Loadable, run_fetch};
use crate::state::toast::Toasts;
use crate::util::metrics::{format_amount, format_percentage, funded_percentage};

/// The chosen campaign, or the first one when nothing (or something stale)
/// is chosen.
pub(crate) fn resolve_selection<'a>(campaigns: &'a [Campaign], selected: Option<&str>) -> Option<&'a Campaign> {
    selected
        .and_then(|id| campaigns.iter().find(|c| c.id == id))
        .or_else(|| campaigns.first())
}

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let ctx = expect_context::<AuthContext>();
    let toasts = expect_context::<RwSignal<Toasts>>();
    let campaigns = RwSignal::new(Loadable::<Vec<Campaign>>::default());
    let selected_id = RwSignal::new(None::<String>);

    let api = ctx.api.clone();
    leptos::task::spawn_local(async move {
        run_fetch(campaigns, toasts, "Failed to load campaigns", api.list_campaigns()).await;
    });

    let selected = Memo::new(move |_| {
        let chosen = selected_id.get();
        campaigns.with(|l| resolve_selection(l.data.as_deref().unwrap_or_default(), chosen.as_deref()).cloned())
    });
    let selected_key = Memo::new(move |_| selected.with(|c| c.as_ref().map(|c| c.id.clone())));

    view! {
        <div class="page page--analytics">
            <Show
                when=move || !campaigns.get().is_pending()
                fallback=|| view! { <div class="spinner" aria-label="Loading"></div> }
            >
                <Show
                    when=move || selected.with(Option::is_some)
                    fallback=|| {
                        view! {
                            <div class="empty-state">
                                <h1>"No Campaigns Available"</h1>
                                <p class="muted">"Create your first campaign to access analytics."</p>
                                <A href="/create-campaign" attr:class="btn btn--primary">"Create Campaign"</A>
                            </div>
                        }
                    }
                >
                    <header class="page__header">
                        <h1>"Analytics & Predictions"</h1>
                        <p class="muted">"AI-powered insights for your crowdfunding campaigns"</p>
                    </header>

                    <select
                        class="field__input analytics__selector"
                        prop:value=move || selected_key.get().unwrap_or_default()
                        on:change=move |ev| selected_id.set(Some(event_target_value(&ev)))
                    >
                        {move || {
                            campaigns
                                .get()
                                .data_or_default()
                                .into_iter()
                                .map(|c| view! { <option value=c.id>{c.title}</option> })
                                .collect_view()
                        }}
                    </select>

                    {move || {
                        selected
                            .get()
                            .map(|c| {
                                let funded = format_percentage(funded_percentage(c.raised_amount, c.goal_amount));
                                view! {
                                    <div class="stat-grid">
                                        <div class="stat-card">
                                            <span class="stat-card__value">{format_amount(c.goal_amount)}</span>
                                            <span class="stat-card__label">"Goal"</span>
                                        </div>
                                        <div class="stat-card">
                                            <span class="stat-card__value">{format_amount(c.raised_amount)}</span>
                                            <span class="stat-card__label">"Raised"</span>
                                        </div>
                                        <div class="stat-card">
                                            <span class="stat-card__value">{funded}"%"</span>
                                            <span class="stat-card__label">"Funded"</span>
                                        </div>
                                    </div>
                                }
                            })
                    }}

                    <MonteCarloSimulator campaign_id=selected_key />
                </Show>
            </Show>
        </div>
    }
}
