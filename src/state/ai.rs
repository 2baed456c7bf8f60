//! AI optimizer panel state.
//!
//! Four independent features, each with its own busy flag so one slow
//! request never blocks the others. Results stay until the feature is run
//! again.

#[cfg(test)]
#[path = "ai_test.rs"]
mod ai_test;

use crate::net::types::{MarketingStrategyResponse, SuccessPredictionResponse};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AiFeature {
    Title,
    Description,
    SuccessPrediction,
    MarketingStrategy,
}

impl AiFeature {
    pub const ALL: [Self; 4] = [Self::Title, Self::Description, Self::SuccessPrediction, Self::MarketingStrategy];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::SuccessPrediction => "success_prediction",
            Self::MarketingStrategy => "marketing_strategy",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Title => "Optimize Title",
            Self::Description => "Enhance Description",
            Self::SuccessPrediction => "Success Prediction",
            Self::MarketingStrategy => "Marketing Strategy",
        }
    }

    #[must_use]
    pub fn blurb(self) -> &'static str {
        match self {
            Self::Title => "Generate compelling campaign titles that attract backers",
            Self::Description => "Improve your campaign story with persuasive copy",
            Self::SuccessPrediction => "Get AI insights on your campaign's success probability",
            Self::MarketingStrategy => "Generate a comprehensive marketing plan",
        }
    }

    #[must_use]
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Title => "Title suggestions generated!",
            Self::Description => "Description enhanced!",
            Self::SuccessPrediction => "Success prediction generated!",
            Self::MarketingStrategy => "Marketing strategy generated!",
        }
    }

    #[must_use]
    pub fn failure_message(self) -> String {
        format!("Failed to optimize {}", self.id())
    }

    fn index(self) -> usize {
        match self {
            Self::Title => 0,
            Self::Description => 1,
            Self::SuccessPrediction => 2,
            Self::MarketingStrategy => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Bands for a probability in `0..=1`: above 0.7 high, above 0.4 medium.
    #[must_use]
    pub fn from_probability(probability: f64) -> Self {
        if probability > 0.7 {
            Self::High
        } else if probability > 0.4 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High Confidence",
            Self::Medium => "Medium Confidence",
            Self::Low => "Low Confidence",
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::High => "confidence confidence--high",
            Self::Medium => "confidence confidence--medium",
            Self::Low => "confidence confidence--low",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SuccessPrediction {
    /// In `0..=1`.
    pub probability: f64,
    pub explanation: String,
    pub recommendations: Vec<String>,
}

impl SuccessPrediction {
    #[must_use]
    pub fn from_response(response: SuccessPredictionResponse) -> Self {
        Self {
            probability: (response.success_percentage / 100.0).clamp(0.0, 1.0),
            explanation: response.analysis,
            recommendations: response.recommendations,
        }
    }

    #[must_use]
    pub fn confidence(&self) -> Confidence {
        Confidence::from_probability(self.probability)
    }

    /// Whole percent, e.g. `"62%"`.
    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{:.0}%", self.probability * 100.0)
    }
}

/// Overview followed by one bullet per channel.
#[must_use]
pub fn format_marketing_strategy(response: &MarketingStrategyResponse) -> String {
    let mut text = response.overview.clone();
    if let Some(channels) = &response.channels {
        text.push_str("\n\nMarketing Channels:\n");
        for channel in channels {
            text.push_str(&format!(
                "\n• {} ({} priority)\n  {}",
                channel.name, channel.priority, channel.strategy
            ));
        }
    }
    text
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AiPanelState {
    busy: [bool; 4],
    pub titles: Option<Vec<String>>,
    pub improved_description: Option<String>,
    pub prediction: Option<SuccessPrediction>,
    pub strategy: Option<String>,
}

impl AiPanelState {
    #[must_use]
    pub fn is_busy(&self, feature: AiFeature) -> bool {
        self.busy[feature.index()]
    }

    /// Mark `feature` busy. Returns `false` if it already was.
    pub fn start(&mut self, feature: AiFeature) -> bool {
        let slot = &mut self.busy[feature.index()];
        if *slot {
            return false;
        }
        *slot = true;
        true
    }

    pub fn finish(&mut self, feature: AiFeature) {
        self.busy[feature.index()] = false;
    }

    #[must_use]
    pub fn has_result(&self, feature: AiFeature) -> bool {
        match feature {
            AiFeature::Title => self.titles.is_some(),
            AiFeature::Description => self.improved_description.is_some(),
            AiFeature::SuccessPrediction => self.prediction.is_some(),
            AiFeature::MarketingStrategy => self.strategy.is_some(),
        }
    }
}
