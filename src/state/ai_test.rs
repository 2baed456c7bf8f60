use super::*;
use crate::net::types::MarketingChannel;

#[test]
fn confidence_bands_use_strict_thresholds() {
    assert_eq!(Confidence::from_probability(0.71), Confidence::High);
    assert_eq!(Confidence::from_probability(0.7), Confidence::Medium);
    assert_eq!(Confidence::from_probability(0.41), Confidence::Medium);
    assert_eq!(Confidence::from_probability(0.4), Confidence::Low);
    assert_eq!(Confidence::from_probability(0.0), Confidence::Low);
}

#[test]
fn prediction_converts_percentage() {
    let prediction = SuccessPrediction::from_response(SuccessPredictionResponse {
        success_percentage: 62.4,
        analysis: "Solid".to_owned(),
        recommendations: vec!["Add video".to_owned()],
    });
    assert!((prediction.probability - 0.624).abs() < 1e-9);
    assert_eq!(prediction.percent_label(), "62%");
    assert_eq!(prediction.confidence(), Confidence::Medium);
}

#[test]
fn marketing_strategy_lists_channels() {
    let response = MarketingStrategyResponse {
        overview: "Lead with community.".to_owned(),
        channels: Some(vec![MarketingChannel {
            name: "Instagram".to_owned(),
            priority: "high".to_owned(),
            strategy: "Daily reels".to_owned(),
        }]),
    };
    assert_eq!(
        format_marketing_strategy(&response),
        "Lead with community.\n\nMarketing Channels:\n\n• Instagram (high priority)\n  Daily reels"
    );
}

#[test]
fn marketing_strategy_without_channels_is_overview() {
    let response = MarketingStrategyResponse { overview: "Just this".to_owned(), channels: None };
    assert_eq!(format_marketing_strategy(&response), "Just this");
}

#[test]
fn busy_flags_are_per_feature() {
    let mut panel = AiPanelState::default();
    assert!(panel.start(AiFeature::Title));
    assert!(!panel.start(AiFeature::Title));
    assert!(panel.start(AiFeature::MarketingStrategy));
    assert!(panel.is_busy(AiFeature::Title));
    assert!(!panel.is_busy(AiFeature::Description));
    panel.finish(AiFeature::Title);
    assert!(!panel.is_busy(AiFeature::Title));
    assert!(panel.is_busy(AiFeature::MarketingStrategy));
}

#[test]
fn has_result_tracks_each_feature() {
    let mut panel = AiPanelState::default();
    assert!(!panel.has_result(AiFeature::Description));
    panel.improved_description = Some("Better".to_owned());
    assert!(panel.has_result(AiFeature::Description));
    assert!(!panel.has_result(AiFeature::Title));
}

#[test]
fn failure_message_names_feature() {
    assert_eq!(AiFeature::SuccessPrediction.failure_message(), "Failed to optimize success_prediction");
}
