//! The signed-in user's own campaigns.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::campaign_card::ProgressBar;
use crate::net::types::Campaign;
use crate::state::auth::AuthContext;
use crate::state::fetch::{Loadable, run_fetch};
use crate::state::toast::{ToastKind, Toasts, notify};
use crate::util::browser::confirm;
use crate::util::metrics::{format_amount, format_percentage, funded_percentage, progress_width};

#[component]
pub fn MyCampaignsPage() -> impl IntoView {
    let ctx = expect_context::<AuthContext>();
    let toasts = expect_context::<RwSignal<Toasts>>();
    let campaigns = RwSignal::new(Loadable::<Vec<Campaign>>::default());

    let api = ctx.api.clone();
    leptos::task::spawn_local(async move {
        run_fetch(campaigns, toasts, "Failed to load your campaigns", api.my_campaigns()).await;
    });

    let api = ctx.api.clone();
    let on_delete = Callback::new(move |id: String| {
        if !confirm("Are you sure you want to delete this campaign?") {
            return;
        }
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.delete_campaign(&id).await {
                Ok(()) => {
                    campaigns.try_update(|l| l.modify(|rows| rows.retain(|c| c.id != id)));
                    notify(toasts, ToastKind::Success, "Campaign deleted successfully");
                }
                Err(e) => notify(toasts, ToastKind::Error, e.user_message("Could not delete campaign")),
            }
        });
    });

    view! {
        <div class="page page--my-campaigns">
            <header class="page__header">
                <h1>"My Campaigns"</h1>
                <A href="/create-campaign" attr:class="btn btn--primary">"New Campaign"</A>
            </header>

            <Show
                when=move || !campaigns.get().is_pending()
                fallback=|| view! { <div class="spinner" aria-label="Loading"></div> }
            >
                <Show
                    when=move || !campaigns.get().data_or_default().is_empty()
                    fallback=|| view! { <p class="empty">"You haven't created any campaigns yet."</p> }
                >
                    <div class="campaign-list">
                        {move || {
                            campaigns
                                .get()
                                .data_or_default()
                                .into_iter()
                                .map(|campaign| view! { <CampaignRow campaign=campaign on_delete=on_delete /> })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn CampaignRow(campaign: Campaign, on_delete: Callback<String>) -> impl IntoView {
    let id = campaign.id.clone();
    let funded = format_percentage(funded_percentage(campaign.raised_amount, campaign.goal_amount));
    let width = format!("{:.1}%", progress_width(campaign.raised_amount, campaign.goal_amount));

    view! {
        <div class="campaign-row">
            <div class="campaign-row__main">
                <A href=format!("/campaign/{}", campaign.id)>
                    <h3>{campaign.title}</h3>
                </A>
                <span class="badge">{campaign.status}</span>
                <ProgressBar width=width />
                <p class="muted">
                    {format_amount(campaign.raised_amount)}" of "{format_amount(campaign.goal_amount)}" · "
                    {funded}"% funded · "{campaign.backers_count}" backers"
                </p>
            </div>
            <button class="btn btn--danger" on:click=move |_| on_delete.run(id.clone())>
                "Delete"
            </button>
        </div>
    }
}
