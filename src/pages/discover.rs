//! Browse every campaign with search and a category filter.

#[cfg(test)]
#[path = "discover_test.rs"]
mod discover_test;

use leptos::prelude::*;

use crate::components::campaign_card::CampaignCard;
use crate::net::types::Campaign;
use crate::state::auth::AuthContext;
use crate::state::campaign_draft::CATEGORIES;
use crate::state::fetch::{Loadable, run_fetch};
use crate::state::toast::Toasts;
use crate::util::metrics::filter_campaigns;

/// Select value meaning "no category filter".
const ALL_CATEGORIES: &str = "all";

/// `None` for the "all" option, else the chosen category.
pub(crate) fn category_filter(selected: &str) -> Option<&str> {
    (!selected.is_empty() && selected != ALL_CATEGORIES).then_some(selected)
}

#[component]
pub fn DiscoverPage() -> impl IntoView {
    let ctx = expect_context::<AuthContext>();
    let toasts = expect_context::<RwSignal<Toasts>>();
    let campaigns = RwSignal::new(Loadable::<Vec<Campaign>>::default());
    let query = RwSignal::new(String::new());
    let category = RwSignal::new(ALL_CATEGORIES.to_owned());

    let api = ctx.api.clone();
    leptos::task::spawn_local(async move {
        run_fetch(campaigns, toasts, "Failed to load campaigns", api.list_campaigns()).await;
    });

    let visible = Memo::new(move |_| {
        let query = query.get();
        let category = category.get();
        campaigns.with(|c| {
            filter_campaigns(c.data.as_deref().unwrap_or_default(), &query, category_filter(&category))
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="page page--discover">
            <header class="page__header">
                <h1>"Discover Campaigns"</h1>
                <p class="muted">"Find projects worth backing"</p>
            </header>

            <div class="filters">
                <input
                    class="field__input"
                    type="search"
                    placeholder="Search campaigns..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <select
                    class="field__input"
                    prop:value=move || category.get()
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    <option value=ALL_CATEGORIES>"All Categories"</option>
                    {CATEGORIES.iter().map(|c| view! { <option value=*c>{*c}</option> }).collect_view()}
                </select>
            </div>

            <Show
                when=move || !campaigns.get().is_pending()
                fallback=|| view! { <div class="spinner" aria-label="Loading"></div> }
            >
                <p class="muted">{move || format!("{} campaigns found", visible.get().len())}</p>
                <Show
                    when=move || !visible.get().is_empty()
                    fallback=|| view! { <p class="empty">"No campaigns match your search."</p> }
                >
                    <div class="campaign-grid">
                        {move || {
                            visible
                                .get()
                                .into_iter()
                                .map(|campaign| view! { <CampaignCard campaign=campaign /> })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}
