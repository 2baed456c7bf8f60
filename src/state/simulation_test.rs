use super::*;

fn result_with(points: u32, insights: usize) -> MonteCarloResult {
    MonteCarloResult {
        progression_data: (0..points)
            .map(|i| ProgressionPoint { day: i64::from(i) + 1, amount: 100.0 * f64::from(i) })
            .collect(),
        key_insights: (0..insights).map(|i| format!("insight {i}")).collect(),
        ..MonteCarloResult::default()
    }
}

#[test]
fn chart_uses_first_twenty_five_points() {
    let result = result_with(60, 0);
    let points = chart_points(&result);
    assert_eq!(points.len(), 25);
    assert_eq!(points[0].day, 1);
    assert_eq!(points[24].day, 25);
}

#[test]
fn short_series_is_shown_whole() {
    assert_eq!(chart_points(&result_with(4, 0)).len(), 4);
}

#[test]
fn only_three_insights_are_listed() {
    let result = result_with(0, 7);
    assert_eq!(key_insights(&result), &["insight 0".to_owned(), "insight 1".to_owned(), "insight 2".to_owned()]);
}

#[test]
fn failure_keeps_previous_result() {
    let mut sim = SimulatorState::default();
    assert!(sim.begin());
    assert!(!sim.begin());
    sim.finish(Ok(result_with(2, 1)));
    assert!(!sim.running);

    sim.begin();
    sim.finish(Err(SIMULATION_FAILED.to_owned()));
    assert_eq!(sim.error.as_deref(), Some(SIMULATION_FAILED));
    assert!(sim.result.is_some());
}

#[test]
fn begin_clears_previous_error() {
    let mut sim = SimulatorState { error: Some("x".to_owned()), ..SimulatorState::default() };
    sim.begin();
    assert_eq!(sim.error, None);
}

#[test]
fn probability_width_is_clamped() {
    assert!((probability_width(140.0) - 100.0).abs() < f64::EPSILON);
    assert!(probability_width(-3.0).abs() < f64::EPSILON);
    assert!(probability_width(f64::NAN).abs() < f64::EPSILON);
}

#[test]
fn axis_label_is_in_thousands() {
    assert_eq!(axis_label(12_600.0), "13k");
    assert_eq!(axis_label(0.0), "0k");
}

#[test]
fn area_polygon_closes_on_baseline() {
    let points = vec![ProgressionPoint { day: 1, amount: 0.0 }, ProgressionPoint { day: 2, amount: 50.0 }];
    assert_eq!(area_polygon(&points, 100.0, 40.0), "0.0,40.0 0.0,40.0 100.0,0.0 100.0,40.0");
    assert_eq!(area_polygon(&[], 100.0, 40.0), "");
}
