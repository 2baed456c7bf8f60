//! AI optimizer panel (wizard step three).
//!
//! DESIGN
//! ======
//! Each feature posts the current draft to its own endpoint and keeps its
//! own busy flag in [`AiPanelState`]. Title and description suggestions can
//! be applied back into the draft; the other two are read-only insights.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::state::ai::{AiFeature, AiPanelState, SuccessPrediction, format_marketing_strategy};
use crate::state::auth::AuthContext;
use crate::state::campaign_draft::CampaignDraft;
use crate::state::toast::{ToastKind, Toasts, notify};

const BASICS_REQUIRED: &str = "Please fill in all basic fields first";

/// Call the endpoint behind `feature` and store its result.
async fn run_feature(api: &ApiClient, feature: AiFeature, draft: &CampaignDraft, panel: RwSignal<AiPanelState>) -> bool {
    let stored = match feature {
        AiFeature::Title => api
            .optimize_title(&draft.ai_brief(false, false))
            .await
            .map(|r| panel.try_update(|p| p.titles = Some(r.titles))),
        AiFeature::Description => api
            .enhance_description(&draft.ai_brief(true, false))
            .await
            .map(|r| panel.try_update(|p| p.improved_description = Some(r.enhanced_description))),
        AiFeature::SuccessPrediction => api
            .success_prediction(&draft.ai_brief(true, true))
            .await
            .map(|r| panel.try_update(|p| p.prediction = Some(SuccessPrediction::from_response(r)))),
        AiFeature::MarketingStrategy => api
            .marketing_strategy(&draft.ai_brief(true, false))
            .await
            .map(|r| panel.try_update(|p| p.strategy = Some(format_marketing_strategy(&r)))),
    };
    match stored {
        Ok(_) => true,
        Err(e) => {
            leptos::logging::warn!("ai {}: {e}", feature.id());
            false
        }
    }
}

#[component]
pub fn AiOptimizer(draft: RwSignal<CampaignDraft>) -> impl IntoView {
    let api = expect_context::<AuthContext>().api;
    let toasts = expect_context::<RwSignal<Toasts>>();
    let panel = RwSignal::new(AiPanelState::default());

    let optimize = move |feature: AiFeature| {
        let snapshot = draft.get_untracked();
        if !snapshot.basics_complete() {
            notify(toasts, ToastKind::Error, BASICS_REQUIRED);
            return;
        }
        if !panel.try_update(|p| p.start(feature)).unwrap_or(false) {
            return;
        }
        let api = api.clone();
        leptos::task::spawn_local(async move {
            if run_feature(&api, feature, &snapshot, panel).await {
                notify(toasts, ToastKind::Success, feature.success_message());
            } else {
                notify(toasts, ToastKind::Error, feature.failure_message());
            }
            panel.try_update(|p| p.finish(feature));
        });
    };

    let apply_title = move |title: String| {
        draft.update(|d| d.title = title);
        notify(toasts, ToastKind::Success, "Title applied!");
    };
    let apply_description = move |description: String| {
        draft.update(|d| d.description = description);
        notify(toasts, ToastKind::Success, "Description applied!");
    };

    view! {
        <section class="wizard__panel ai-optimizer">
            <h2>"AI Campaign Optimizer"</h2>
            <p class="muted">"Enhance your campaign with AI-powered suggestions and insights"</p>

            {AiFeature::ALL
                .into_iter()
                .map(|feature| {
                    let optimize = optimize.clone();
                    let busy = move || panel.get().is_busy(feature);
                    view! {
                        <div class="ai-card">
                            <div class="ai-card__header">
                                <div>
                                    <h3>{feature.title()}</h3>
                                    <p class="muted">{feature.blurb()}</p>
                                </div>
                                <button
                                    class="btn"
                                    type="button"
                                    disabled=busy
                                    on:click=move |_| optimize(feature)
                                >
                                    {move || if busy() { "Optimizing..." } else { "Optimize" }}
                                </button>
                            </div>
                            <Show when=move || panel.get().has_result(feature)>
                                <div class="ai-card__result">
                                    {move || {
                                        let state = panel.get();
                                        match feature {
                                            AiFeature::Title => {
                                                title_suggestions(state.titles.unwrap_or_default(), apply_title)
                                                    .into_any()
                                            }
                                            AiFeature::Description => {
                                                improved_description(
                                                        state.improved_description.unwrap_or_default(),
                                                        apply_description,
                                                    )
                                                    .into_any()
                                            }
                                            AiFeature::SuccessPrediction => {
                                                state.prediction.map(prediction_view).into_any()
                                            }
                                            AiFeature::MarketingStrategy => {
                                                view! {
                                                    <pre class="ai-card__strategy">{state.strategy.unwrap_or_default()}</pre>
                                                }
                                                    .into_any()
                                            }
                                        }
                                    }}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

fn title_suggestions(titles: Vec<String>, apply: impl Fn(String) + Copy + Send + Sync + 'static) -> impl IntoView {
    view! {
        <h4>"Suggested Titles:"</h4>
        {titles
            .into_iter()
            .map(|title| {
                let chosen = title.clone();
                view! {
                    <div class="ai-card__suggestion">
                        <span>{title}</span>
                        <button class="btn btn--ghost" type="button" on:click=move |_| apply(chosen.clone())>
                            "Use"
                        </button>
                    </div>
                }
            })
            .collect_view()}
    }
}

fn improved_description(text: String, apply: impl Fn(String) + Copy + Send + Sync + 'static) -> impl IntoView {
    let chosen = text.clone();
    view! {
        <h4>"Enhanced Description:"</h4>
        <p class="ai-card__text">{text}</p>
        <button class="btn btn--ghost" type="button" on:click=move |_| apply(chosen.clone())>
            "Use This Description"
        </button>
    }
}

fn prediction_view(prediction: SuccessPrediction) -> impl IntoView {
    let confidence = prediction.confidence();
    view! {
        <div class="ai-card__prediction">
            <span class="ai-card__percent">{prediction.percent_label()}</span>
            <span class=confidence.css_class()>{confidence.label()}</span>
        </div>
        <p class="ai-card__text">{prediction.explanation}</p>
        <ul class="ai-card__recommendations">
            {prediction
                .recommendations
                .into_iter()
                .map(|r| view! { <li>{r}</li> })
                .collect_view()}
        </ul>
    }
}
