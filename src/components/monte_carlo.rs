//! Monte Carlo funding simulator.
//!
//! Runs only when the user asks. A failure shows an inline message and is
//! never retried automatically. Switching campaigns clears the old result.

use leptos::prelude::*;

use crate::net::types::MonteCarloResult;
use crate::state::auth::AuthContext;
use crate::state::simulation::{
    SIMULATION_FAILED, SimulatorState, area_polygon, axis_label, chart_points, key_insights, probability_width,
};
use crate::util::metrics::{format_amount, format_percentage};

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 200.0;

#[component]
pub fn MonteCarloSimulator(#[prop(into)] campaign_id: Signal<Option<String>>) -> impl IntoView {
    let api = expect_context::<AuthContext>().api;
    let sim = RwSignal::new(SimulatorState::default());

    Effect::new(move || {
        campaign_id.track();
        sim.update(SimulatorState::reset);
    });

    let run = move |_| {
        let Some(id) = campaign_id.get_untracked() else {
            return;
        };
        if !sim.try_update(SimulatorState::begin).unwrap_or(false) {
            return;
        }
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.monte_carlo(&id).await.map_err(|e| {
                leptos::logging::warn!("monte carlo for {id}: {e}");
                SIMULATION_FAILED.to_owned()
            });
            // Drop a result for a campaign that is no longer selected.
            if campaign_id.try_get_untracked().flatten().as_deref() == Some(id.as_str()) {
                sim.try_update(|s| s.finish(result));
            }
        });
    };

    view! {
        <section class="simulator">
            <div class="simulator__header">
                <h2>"Monte Carlo Simulation"</h2>
                <button
                    class="btn btn--primary"
                    disabled=move || sim.get().running || campaign_id.get().is_none()
                    on:click=run
                >
                    {move || if sim.get().running { "Running..." } else { "Run Simulation" }}
                </button>
            </div>

            {move || sim.get().error.map(|message| view! { <p class="simulator__error">{message}</p> })}

            {move || sim.get().result.map(simulation_result)}
        </section>
    }
}

fn simulation_result(result: MonteCarloResult) -> impl IntoView {
    let probability = format!("{:.1}%", probability_width(result.success_probability));
    let points = chart_points(&result).to_vec();
    let polygon = area_polygon(&points, CHART_WIDTH, CHART_HEIGHT);
    let peak = points.iter().map(|p| p.amount).fold(0.0_f64, f64::max);
    let insights = key_insights(&result).to_vec();

    view! {
        <div class="simulator__scenarios">
            <Scenario label="Pessimistic" amount=result.pessimistic />
            <Scenario label="Realistic" amount=result.realistic />
            <Scenario label="Optimistic" amount=result.optimistic />
        </div>

        <div class="simulator__probability">
            <span>"Success probability"</span>
            <strong>{format_percentage(result.success_probability)}"%"</strong>
            <div class="progress">
                <div class="progress__fill" style:width=probability></div>
            </div>
        </div>

        <figure class="simulator__chart">
            <svg viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}") preserveAspectRatio="none">
                <polygon class="simulator__area" points=polygon />
            </svg>
            <figcaption class="simulator__axis">
                <span>{axis_label(peak)}</span>
                <span>{axis_label(0.0)}</span>
            </figcaption>
        </figure>

        <ul class="simulator__insights">
            {insights.into_iter().map(|insight| view! { <li>{insight}</li> }).collect_view()}
        </ul>
    }
}

#[component]
fn Scenario(label: &'static str, amount: f64) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{format_amount(amount)}</span>
        </div>
    }
}
