//! Step one of the create-campaign wizard.

use leptos::prelude::*;

use crate::state::campaign_draft::{CATEGORIES, CampaignDraft, CampaignStatus, MAX_DURATION_DAYS, MIN_DURATION_DAYS};

#[component]
pub fn CampaignBasics(draft: RwSignal<CampaignDraft>) -> impl IntoView {
    let tag_input = RwSignal::new(String::new());

    let add_tag = move || {
        let raw = tag_input.get();
        if draft.try_update(|d| d.add_tag(&raw)).unwrap_or(false) {
            tag_input.set(String::new());
        }
    };

    view! {
        <section class="wizard__panel">
            <h2>"Campaign Basics"</h2>

            <label class="field">
                "Title *"
                <input
                    class="field__input"
                    placeholder="Give your campaign a clear name"
                    prop:value=move || draft.get().title
                    on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                />
            </label>

            <label class="field">
                "Description *"
                <textarea
                    class="field__input"
                    rows="6"
                    prop:value=move || draft.get().description
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                ></textarea>
            </label>

            <div class="field-row">
                <label class="field">
                    "Category *"
                    <select
                        class="field__input"
                        prop:value=move || draft.get().category
                        on:change=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                    >
                        <option value="">"Select a category"</option>
                        {CATEGORIES
                            .iter()
                            .map(|c| view! { <option value=*c>{*c}</option> })
                            .collect_view()}
                    </select>
                </label>

                <label class="field">
                    "Funding goal (₹) *"
                    <input
                        class="field__input"
                        type="number"
                        min="1"
                        prop:value=move || draft.get().goal_amount
                        on:input=move |ev| draft.update(|d| d.goal_amount = event_target_value(&ev))
                    />
                </label>

                <label class="field">
                    "Duration (days)"
                    <input
                        class="field__input"
                        type="number"
                        min=MIN_DURATION_DAYS.to_string()
                        max=MAX_DURATION_DAYS.to_string()
                        prop:value=move || draft.get().duration_days.to_string()
                        on:change=move |ev| draft.update(|d| d.set_duration(&event_target_value(&ev)))
                    />
                </label>
            </div>

            <label class="field">
                "Image URL"
                <input
                    class="field__input"
                    type="url"
                    prop:value=move || draft.get().image_url
                    on:input=move |ev| draft.update(|d| d.image_url = event_target_value(&ev))
                />
            </label>

            <label class="field">
                "Status"
                <select
                    class="field__input"
                    prop:value=move || draft.get().status.as_str()
                    on:change=move |ev| draft.update(|d| d.status = CampaignStatus::parse(&event_target_value(&ev)))
                >
                    <option value="active">"Active"</option>
                    <option value="draft">"Draft"</option>
                </select>
            </label>

            <div class="field">
                "Tags"
                <div class="tag-input">
                    <input
                        class="field__input"
                        placeholder="Add a tag and press Enter"
                        prop:value=move || tag_input.get()
                        on:input=move |ev| tag_input.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                add_tag();
                            }
                        }
                    />
                    <button class="btn" type="button" on:click=move |_| add_tag()>"Add"</button>
                </div>
                <div class="tag-list">
                    {move || {
                        draft
                            .get()
                            .tags
                            .into_iter()
                            .map(|tag| {
                                let remove = tag.clone();
                                view! {
                                    <span class="badge badge--tag">
                                        {tag}
                                        <button
                                            class="badge__remove"
                                            type="button"
                                            aria-label="Remove tag"
                                            on:click=move |_| draft.update(|d| d.remove_tag(&remove))
                                        >
                                            "✕"
                                        </button>
                                    </span>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}
