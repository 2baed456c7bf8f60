//! Backend DTOs.
//!
//! DESIGN
//! ======
//! The backend is loose about numbers: amounts arrive as integers, floats,
//! numeric strings or `null` depending on how a row was written. Deserializers
//! here accept all of those so one odd row never blanks a whole list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A crowdfunding campaign as listed by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// Funding target in rupees.
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub goal_amount: f64,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub raised_amount: f64,
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub backers_count: i64,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub status: String,
    #[serde(default)]
    pub creator_id: Option<String>,
    #[serde(default)]
    pub creator_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub reward_tiers: Vec<RewardTier>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub duration_days: i64,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardTier {
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub amount: f64,
    #[serde(default)]
    pub description: String,
}

/// Body of `POST /campaigns/extended`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewCampaign {
    pub title: String,
    pub description: String,
    pub category: String,
    pub goal_amount: f64,
    pub duration_days: u32,
    pub status: String,
    pub tags: Vec<String>,
    pub reward_tiers: Vec<RewardTier>,
    pub image_url: Option<String>,
}

/// Platform totals from `GET /admin/stats`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminStats {
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub total_campaigns: i64,
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub active_campaigns: i64,
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub total_users: i64,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub total_raised: f64,
}

/// A row of `GET /admin/users`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl AdminUser {
    /// Single uppercase letter for the avatar placeholder.
    #[must_use]
    pub fn initial(&self) -> String {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.email)
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn role_label(&self) -> &'static str {
        if self.is_admin { "admin" } else { "user" }
    }
}

/// Result of `GET /analytics/monte-carlo/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloResult {
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub pessimistic: f64,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub realistic: f64,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub optimistic: f64,
    /// Percentage in `0..=100`.
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub success_probability: f64,
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub progression_data: Vec<ProgressionPoint>,
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub key_insights: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressionPoint {
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub day: i64,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub amount: f64,
}

/// Campaign copy sent to the AI endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AiCampaignBrief {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_tiers: Option<Vec<RewardTier>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TitleSuggestions {
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub titles: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct EnhancedDescription {
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub enhanced_description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SuccessPredictionResponse {
    /// Percentage in `0..=100`.
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub success_percentage: f64,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub analysis: String,
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub recommendations: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MarketingStrategyResponse {
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub overview: String,
    #[serde(default)]
    pub channels: Option<Vec<MarketingChannel>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MarketingChannel {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub strategy: String,
}

/// `{ "message": .. }` acknowledgement bodies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub message: String,
}

/// Body of `PUT /auth/update-profile`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or numeric id")),
    }
}

fn deserialize_lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(0.0),
        serde_json::Value::Number(n) => n.as_f64().ok_or_else(|| D::Error::custom("number out of range")),
        serde_json::Value::String(s) if s.trim().is_empty() => Ok(0.0),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("expected numeric string, got '{s}'"))),
        _ => Err(D::Error::custom("expected number")),
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_lenient_f64(deserializer)?;
    if value.is_finite() && value >= i64::MIN as f64 && value <= i64::MAX as f64 {
        return Ok(value.trunc() as i64);
    }
    Err(D::Error::custom(format!("value {value} out of range for i64")))
}

fn deserialize_string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_vec_or_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
