//! Campaign summary card used by the home and discover pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Campaign;
use crate::util::metrics::{format_amount, format_percentage, funded_percentage, progress_width};

#[component]
pub fn CampaignCard(campaign: Campaign) -> impl IntoView {
    let href = format!("/campaign/{}", campaign.id);
    let funded = format_percentage(funded_percentage(campaign.raised_amount, campaign.goal_amount));
    let width = format!("{:.1}%", progress_width(campaign.raised_amount, campaign.goal_amount));
    let image = campaign.image_url.clone().filter(|u| !u.is_empty());

    view! {
        <A href=href attr:class="campaign-card">
            {image.map(|src| view! { <img class="campaign-card__image" src=src alt="" /> })}
            <div class="campaign-card__body">
                <span class="badge">{campaign.category.clone()}</span>
                <h3 class="campaign-card__title">{campaign.title.clone()}</h3>
                <p class="campaign-card__description">{campaign.description.clone()}</p>
                <ProgressBar width=width />
                <div class="campaign-card__stats">
                    <span>{format_amount(campaign.raised_amount)}" raised"</span>
                    <span>{funded}"% funded"</span>
                    <span>{campaign.backers_count}" backers"</span>
                </div>
            </div>
        </A>
    }
}

/// Horizontal bar; `width` is a CSS percentage such as `"25.0%"`.
#[component]
pub fn ProgressBar(width: String) -> impl IntoView {
    view! {
        <div class="progress">
            <div class="progress__fill" style:width=width></div>
        </div>
    }
}
