//! Single campaign view.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::campaign_card::ProgressBar;
use crate::net::types::Campaign;
use crate::state::auth::AuthContext;
use crate::state::fetch::{Loadable, run_fetch};
use crate::state::toast::Toasts;
use crate::util::metrics::{format_amount, format_percentage, funded_percentage, progress_width};

#[component]
pub fn CampaignDetailPage() -> impl IntoView {
    let ctx = expect_context::<AuthContext>();
    let toasts = expect_context::<RwSignal<Toasts>>();
    let params = use_params_map();
    let campaign = RwSignal::new(Loadable::<Campaign>::default());

    let api = ctx.api.clone();
    Effect::new(move || {
        let Some(id) = params.with(|p| p.get("id")) else {
            return;
        };
        let api = api.clone();
        leptos::task::spawn_local(async move {
            run_fetch(campaign, toasts, "Failed to load campaign", api.get_campaign(&id)).await;
        });
    });

    view! {
        <div class="page page--campaign">
            {move || {
                let state = campaign.get();
                match state.data {
                    Some(c) => campaign_body(c).into_any(),
                    None if state.is_pending() => {
                        view! { <div class="spinner" aria-label="Loading"></div> }.into_any()
                    }
                    None => view! { <p class="empty">"Campaign not found."</p> }.into_any(),
                }
            }}
        </div>
    }
}

fn campaign_body(c: Campaign) -> impl IntoView {
    let funded = format_percentage(funded_percentage(c.raised_amount, c.goal_amount));
    let width = format!("{:.1}%", progress_width(c.raised_amount, c.goal_amount));
    let image = c.image_url.filter(|u| !u.is_empty());
    let creator = c.creator_name.filter(|n| !n.is_empty());

    view! {
        <article class="campaign">
            {image.map(|src| view! { <img class="campaign__image" src=src alt="" /> })}
            <header class="campaign__header">
                <span class="badge">{c.category}</span>
                <h1>{c.title}</h1>
                {creator.map(|name| view! { <p class="muted">"by "{name}</p> })}
            </header>

            <section class="campaign__funding">
                <ProgressBar width=width />
                <div class="campaign__stats">
                    <div>
                        <strong>{format_amount(c.raised_amount)}</strong>
                        " raised of "
                        {format_amount(c.goal_amount)}
                    </div>
                    <div>
                        <strong>{funded}"%"</strong>
                        " funded"
                    </div>
                    <div>
                        <strong>{c.backers_count}</strong>
                        " backers"
                    </div>
                    <div>
                        <strong>{c.duration_days}</strong>
                        " days"
                    </div>
                </div>
            </section>

            <section class="campaign__story">
                <h2>"About this campaign"</h2>
                <p>{c.description}</p>
            </section>

            {(!c.reward_tiers.is_empty())
                .then(|| {
                    view! {
                        <section class="campaign__rewards">
                            <h2>"Rewards"</h2>
                            {c
                                .reward_tiers
                                .into_iter()
                                .map(|tier| {
                                    view! {
                                        <div class="reward">
                                            <strong>{format_amount(tier.amount)}</strong>
                                            <p>{tier.description}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </section>
                    }
                })}

            <div class="tag-list">
                {c.tags.into_iter().map(|tag| view! { <span class="badge badge--tag">{tag}</span> }).collect_view()}
            </div>
        </article>
    }
}
