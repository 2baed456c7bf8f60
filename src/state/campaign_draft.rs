//! Create-campaign wizard state.
//!
//! The draft keeps every field as the user typed it (amounts are strings)
//! and only converts to the backend payload on submit.

#[cfg(test)]
#[path = "campaign_draft_test.rs"]
mod campaign_draft_test;

use crate::net::types::{AiCampaignBrief, NewCampaign, RewardTier};

pub const CATEGORIES: [&str; 10] = [
    "Technology",
    "Health",
    "Food",
    "Environment",
    "Education",
    "Art",
    "Film",
    "Music",
    "Games",
    "Fashion",
];

pub const DEFAULT_DURATION_DAYS: u32 = 30;
pub const MIN_DURATION_DAYS: u32 = 1;
pub const MAX_DURATION_DAYS: u32 = 60;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Please fill in all required fields")]
    MissingRequiredFields,
    #[error("Goal amount must be a positive number")]
    InvalidGoalAmount,
    #[error("Duration must be between 1 and 60 days")]
    InvalidDuration,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CampaignStatus {
    Draft,
    #[default]
    Active,
}

impl CampaignStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == "draft" { Self::Draft } else { Self::Active }
    }
}

/// One reward tier as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TierDraft {
    pub amount: String,
    pub description: String,
}

impl TierDraft {
    /// A tier counts when it has a positive amount and a description.
    #[must_use]
    pub fn to_reward(&self) -> Option<RewardTier> {
        let amount = parse_amount(&self.amount)?;
        let description = self.description.trim();
        if description.is_empty() {
            return None;
        }
        Some(RewardTier { amount, description: description.to_owned() })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TierField {
    Amount,
    Description,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CampaignDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub goal_amount: String,
    pub duration_days: u32,
    pub status: CampaignStatus,
    pub tags: Vec<String>,
    pub reward_tiers: Vec<TierDraft>,
    pub image_url: String,
}

impl Default for CampaignDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: String::new(),
            goal_amount: String::new(),
            duration_days: DEFAULT_DURATION_DAYS,
            status: CampaignStatus::default(),
            tags: Vec::new(),
            reward_tiers: vec![TierDraft::default()],
            image_url: String::new(),
        }
    }
}

impl CampaignDraft {
    /// Title, description, category and goal are all filled in.
    #[must_use]
    pub fn basics_complete(&self) -> bool {
        [&self.title, &self.description, &self.category, &self.goal_amount]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    /// # Errors
    ///
    /// Returns the first failing rule.
    pub fn validate(&self) -> Result<(), DraftError> {
        if !self.basics_complete() {
            return Err(DraftError::MissingRequiredFields);
        }
        if parse_amount(&self.goal_amount).is_none() {
            return Err(DraftError::InvalidGoalAmount);
        }
        if !(MIN_DURATION_DAYS..=MAX_DURATION_DAYS).contains(&self.duration_days) {
            return Err(DraftError::InvalidDuration);
        }
        Ok(())
    }

    /// Add a trimmed tag. Empty and duplicate tags are ignored.
    pub fn add_tag(&mut self, raw: &str) -> bool {
        let tag = raw.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_owned());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn add_tier(&mut self) {
        self.reward_tiers.push(TierDraft::default());
    }

    /// Remove tier `index`; the last remaining tier is kept.
    pub fn remove_tier(&mut self, index: usize) -> bool {
        if self.reward_tiers.len() <= 1 || index >= self.reward_tiers.len() {
            return false;
        }
        self.reward_tiers.remove(index);
        true
    }

    pub fn update_tier(&mut self, index: usize, field: TierField, value: String) {
        if let Some(tier) = self.reward_tiers.get_mut(index) {
            match field {
                TierField::Amount => tier.amount = value,
                TierField::Description => tier.description = value,
            }
        }
    }

    /// Set the duration from an input value; unparsable input falls back to
    /// the default and the result is clamped to the allowed range.
    pub fn set_duration(&mut self, raw: &str) {
        let days = raw.trim().parse::<u32>().unwrap_or(DEFAULT_DURATION_DAYS);
        self.duration_days = days.clamp(MIN_DURATION_DAYS, MAX_DURATION_DAYS);
    }

    /// Tiers with both an amount and a description.
    #[must_use]
    pub fn complete_tiers(&self) -> Vec<RewardTier> {
        self.reward_tiers.iter().filter_map(TierDraft::to_reward).collect()
    }

    /// # Errors
    ///
    /// Returns a [`DraftError`] when the draft does not validate.
    pub fn to_payload(&self) -> Result<NewCampaign, DraftError> {
        self.validate()?;
        let goal_amount = parse_amount(&self.goal_amount).ok_or(DraftError::InvalidGoalAmount)?;
        let image_url = self.image_url.trim();
        Ok(NewCampaign {
            title: self.title.trim().to_owned(),
            description: self.description.trim().to_owned(),
            category: self.category.clone(),
            goal_amount,
            duration_days: self.duration_days,
            status: self.status.as_str().to_owned(),
            tags: self.tags.clone(),
            reward_tiers: self.complete_tiers(),
            image_url: (!image_url.is_empty()).then(|| image_url.to_owned()),
        })
    }

    /// Copy for the AI endpoints. Goal and tiers are attached only when the
    /// endpoint uses them.
    #[must_use]
    pub fn ai_brief(&self, with_goal: bool, with_tiers: bool) -> AiCampaignBrief {
        AiCampaignBrief {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            goal_amount: if with_goal { parse_amount(&self.goal_amount) } else { None },
            reward_tiers: with_tiers.then(|| self.complete_tiers()),
        }
    }
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// Wizard steps in order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    Basics,
    RewardTiers,
    AiOptimization,
}

impl WizardStep {
    pub const ALL: [Self; 3] = [Self::Basics, Self::RewardTiers, Self::AiOptimization];

    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::Basics => 1,
            Self::RewardTiers => 2,
            Self::AiOptimization => 3,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Basics => "Campaign Basics",
            Self::RewardTiers => "Reward Tiers",
            Self::AiOptimization => "AI Optimization",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Basics => Self::RewardTiers,
            Self::RewardTiers | Self::AiOptimization => Self::AiOptimization,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Basics | Self::RewardTiers => Self::Basics,
            Self::AiOptimization => Self::RewardTiers,
        }
    }

    #[must_use]
    pub fn is_last(self) -> bool {
        self == Self::AiOptimization
    }

    /// Move forward from `self`, enforcing the basics on step one.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::MissingRequiredFields`] when leaving the basics
    /// step incomplete.
    pub fn advance(self, draft: &CampaignDraft) -> Result<Self, DraftError> {
        if self == Self::Basics && !draft.basics_complete() {
            return Err(DraftError::MissingRequiredFields);
        }
        Ok(self.next())
    }
}
