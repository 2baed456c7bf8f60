//! Three-step create-campaign wizard.
//!
//! ARCHITECTURE
//! ============
//! The page owns the [`CampaignDraft`] signal and the current
//! [`WizardStep`]; each step panel edits the draft in place. Publishing
//! validates the whole draft, posts it, and navigates to the new campaign.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::ai_optimizer::AiOptimizer;
use crate::components::campaign_basics::CampaignBasics;
use crate::components::reward_tiers::RewardTiers;
use crate::state::auth::AuthContext;
use crate::state::campaign_draft::{CampaignDraft, WizardStep};
use crate::state::toast::{ToastKind, Toasts, notify};

#[component]
pub fn CreateCampaignPage() -> impl IntoView {
    let ctx = expect_context::<AuthContext>();
    let toasts = expect_context::<RwSignal<Toasts>>();
    let navigate = use_navigate();
    let draft = RwSignal::new(CampaignDraft::default());
    let step = RwSignal::new(WizardStep::default());
    let submitting = RwSignal::new(false);
    let created_id = RwSignal::new(None::<String>);

    Effect::new(move || {
        if let Some(id) = created_id.get() {
            navigate(&format!("/campaign/{id}"), NavigateOptions::default());
        }
    });

    let on_next = move |_| match step.get().advance(&draft.get_untracked()) {
        Ok(next) => step.set(next),
        Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
    };
    let on_prev = move |_| step.update(|s| *s = s.prev());

    let on_publish = move |_| {
        if submitting.get() {
            return;
        }
        let payload = match draft.get_untracked().to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                notify(toasts, ToastKind::Error, e.to_string());
                return;
            }
        };
        submitting.set(true);
        let api = ctx.api.clone();
        leptos::task::spawn_local(async move {
            match api.create_campaign(&payload).await {
                Ok(created) => {
                    leptos::logging::log!("campaign created: {}", created.id);
                    notify(toasts, ToastKind::Success, "Campaign created successfully!");
                    created_id.try_set(Some(created.id));
                }
                Err(e) => {
                    notify(toasts, ToastKind::Error, e.user_message("Failed to create campaign"));
                }
            }
            submitting.try_set(false);
        });
    };

    view! {
        <div class="page page--create">
            <header class="page__header">
                <h1>"Create Your Campaign"</h1>
                <ol class="wizard__steps">
                    {WizardStep::ALL
                        .into_iter()
                        .map(|s| {
                            view! {
                                <li
                                    class="wizard__step"
                                    class=("wizard__step--active", move || step.get() == s)
                                    class=("wizard__step--done", move || step.get().number() > s.number())
                                >
                                    <span class="wizard__step-number">{s.number()}</span>
                                    <span>{s.name()}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </header>

            {move || match step.get() {
                WizardStep::Basics => view! { <CampaignBasics draft=draft /> }.into_any(),
                WizardStep::RewardTiers => view! { <RewardTiers draft=draft /> }.into_any(),
                WizardStep::AiOptimization => view! { <AiOptimizer draft=draft /> }.into_any(),
            }}

            <div class="wizard__nav">
                <button
                    class="btn"
                    type="button"
                    disabled=move || step.get() == WizardStep::Basics
                    on:click=on_prev
                >
                    "Previous"
                </button>
                <Show
                    when=move || step.get().is_last()
                    fallback=move || {
                        view! {
                            <button class="btn btn--primary" type="button" on:click=on_next>
                                "Next"
                            </button>
                        }
                    }
                >
                    <button
                        class="btn btn--primary"
                        type="button"
                        disabled=move || submitting.get()
                        on:click=on_publish.clone()
                    >
                        {move || if submitting.get() { "Publishing..." } else { "Publish Campaign" }}
                    </button>
                </Show>
            </div>
        </div>
    }
}
