//! Personal dashboard: totals across the user's campaigns.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::campaign_card::ProgressBar;
use crate::net::types::Campaign;
use crate::state::auth::AuthContext;
use crate::state::fetch::{Loadable, run_fetch};
use crate::state::toast::Toasts;
use crate::util::metrics::{DashboardTotals, format_amount, format_percentage, funded_percentage, progress_width};

#[component]
pub fn UserDashboardPage() -> impl IntoView {
    let ctx = expect_context::<AuthContext>();
    let toasts = expect_context::<RwSignal<Toasts>>();
    let auth = ctx.state;
    let campaigns = RwSignal::new(Loadable::<Vec<Campaign>>::default());

    let api = ctx.api.clone();
    leptos::task::spawn_local(async move {
        run_fetch(campaigns, toasts, "Failed to load your campaigns", api.my_campaigns()).await;
    });

    let totals = Memo::new(move |_| campaigns.with(|c| DashboardTotals::from_campaigns(c.data.as_deref().unwrap_or_default())));
    let greeting = move || auth.get().user.map(|u| u.display_name()).unwrap_or_default();

    view! {
        <div class="page page--dashboard">
            <header class="page__header">
                <h1>"Welcome back, "{greeting}</h1>
                <A href="/create-campaign" attr:class="btn btn--primary">"Start a Campaign"</A>
            </header>

            <div class="stat-grid">
                <div class="stat-card">
                    <span class="stat-card__label">"Campaigns"</span>
                    <span class="stat-card__value">{move || totals.get().campaigns}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Total Raised"</span>
                    <span class="stat-card__value">{move || format_amount(totals.get().raised)}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Backers"</span>
                    <span class="stat-card__value">{move || totals.get().backers}</span>
                </div>
            </div>

            <section>
                <h2>"Your Campaigns"</h2>
                <Show
                    when=move || !campaigns.get().is_pending()
                    fallback=|| view! { <div class="spinner" aria-label="Loading"></div> }
                >
                    <Show
                        when=move || !campaigns.get().data_or_default().is_empty()
                        fallback=|| view! { <p class="empty">"No campaigns yet."</p> }
                    >
                        <div class="campaign-list">
                            {move || {
                                campaigns
                                    .get()
                                    .data_or_default()
                                    .into_iter()
                                    .map(dashboard_row)
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                </Show>
            </section>
        </div>
    }
}

fn dashboard_row(campaign: Campaign) -> impl IntoView {
    let funded = format_percentage(funded_percentage(campaign.raised_amount, campaign.goal_amount));
    let width = format!("{:.1}%", progress_width(campaign.raised_amount, campaign.goal_amount));
    view! {
        <A href=format!("/campaign/{}", campaign.id) attr:class="campaign-row">
            <div class="campaign-row__main">
                <h3>{campaign.title}</h3>
                <ProgressBar width=width />
                <p class="muted">{format_amount(campaign.raised_amount)}" raised · "{funded}"% funded"</p>
            </div>
        </A>
    }
}
