//! Step two of the create-campaign wizard.

use leptos::prelude::*;

use crate::state::campaign_draft::{CampaignDraft, TierField};

#[component]
pub fn RewardTiers(draft: RwSignal<CampaignDraft>) -> impl IntoView {
    let tier_count = Memo::new(move |_| draft.with(|d| d.reward_tiers.len()));

    view! {
        <section class="wizard__panel">
            <h2>"Reward Tiers"</h2>
            <p class="muted">"Tiers without an amount and a description are left out when you publish."</p>

            {move || {
                (0..tier_count.get())
                    .map(|index| {
                        let tier = move || draft.get().reward_tiers.get(index).cloned().unwrap_or_default();
                        view! {
                            <div class="tier">
                                <div class="tier__header">
                                    <h3>{format!("Tier {}", index + 1)}</h3>
                                    <Show when=move || { tier_count.get() > 1 }>
                                        <button
                                            class="btn btn--ghost"
                                            type="button"
                                            on:click=move |_| {
                                                draft.update(|d| {
                                                    d.remove_tier(index);
                                                });
                                            }
                                        >
                                            "Remove"
                                        </button>
                                    </Show>
                                </div>
                                <label class="field">
                                    "Pledge amount (₹)"
                                    <input
                                        class="field__input"
                                        type="number"
                                        min="1"
                                        prop:value=move || tier().amount
                                        on:input=move |ev| {
                                            draft.update(|d| {
                                                d.update_tier(index, TierField::Amount, event_target_value(&ev));
                                            });
                                        }
                                    />
                                </label>
                                <label class="field">
                                    "What backers get"
                                    <textarea
                                        class="field__input"
                                        rows="3"
                                        prop:value=move || tier().description
                                        on:input=move |ev| {
                                            draft.update(|d| {
                                                d.update_tier(index, TierField::Description, event_target_value(&ev));
                                            });
                                        }
                                    ></textarea>
                                </label>
                            </div>
                        }
                    })
                    .collect_view()
            }}

            <button class="btn" type="button" on:click=move |_| draft.update(CampaignDraft::add_tier)>
                "+ Add tier"
            </button>
        </section>
    }
}
