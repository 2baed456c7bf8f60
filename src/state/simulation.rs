//! Monte Carlo simulator display state.
//!
//! The simulation runs only on request. Failures show an inline message and
//! keep any earlier result; nothing retries on its own.

#[cfg(test)]
#[path = "simulation_test.rs"]
mod simulation_test;

use std::fmt::Write as _;

use crate::net::types::{MonteCarloResult, ProgressionPoint};

/// Progression points drawn on the chart.
pub const CHART_POINTS: usize = 25;
/// Insights listed under the chart.
pub const KEY_INSIGHTS: usize = 3;
pub const SIMULATION_FAILED: &str = "Failed to run simulation. Please try again.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimulatorState {
    pub running: bool,
    pub result: Option<MonteCarloResult>,
    pub error: Option<String>,
}

impl SimulatorState {
    /// Start a run. Returns `false` while one is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.error = None;
        true
    }

    pub fn finish(&mut self, result: Result<MonteCarloResult, String>) {
        self.running = false;
        match result {
            Ok(result) => self.result = Some(result),
            Err(message) => self.error = Some(message),
        }
    }

    /// Forget the previous campaign's result.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[must_use]
pub fn chart_points(result: &MonteCarloResult) -> &[ProgressionPoint] {
    let end = result.progression_data.len().min(CHART_POINTS);
    &result.progression_data[..end]
}

#[must_use]
pub fn key_insights(result: &MonteCarloResult) -> &[String] {
    let end = result.key_insights.len().min(KEY_INSIGHTS);
    &result.key_insights[..end]
}

/// Bar width for a percentage, clamped to `0..=100`.
#[must_use]
pub fn probability_width(success_probability: f64) -> f64 {
    if success_probability.is_finite() { success_probability.clamp(0.0, 100.0) } else { 0.0 }
}

/// Y-axis tick label in thousands, e.g. `12600.0` -> `"13k"`.
#[must_use]
pub fn axis_label(value: f64) -> String {
    format!("{:.0}k", value / 1000.0)
}

/// SVG polygon points for an area chart of `points` inside a
/// `width` x `height` box, baseline at the bottom edge.
#[must_use]
pub fn area_polygon(points: &[ProgressionPoint], width: f64, height: f64) -> String {
    if points.is_empty() {
        return String::new();
    }
    let max = points.iter().map(|p| p.amount).fold(0.0_f64, f64::max);
    #[allow(clippy::cast_precision_loss)]
    let span = (points.len().saturating_sub(1)).max(1) as f64;
    let mut out = format!("0.0,{height:.1}");
    for (i, point) in points.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let x = width * i as f64 / span;
        let y = if max > 0.0 { height - (point.amount / max) * height } else { height };
        let _ = write!(out, " {x:.1},{y:.1}");
    }
    let last_x = if points.len() > 1 { width } else { 0.0 };
    let _ = write!(out, " {last_x:.1},{height:.1}");
    out
}
