//! Derived display values for campaign lists and cards.
//!
//! These are advisory numbers computed from whatever the backend returned;
//! nothing here is validated against the server.

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;

use crate::net::types::Campaign;

/// `raised / goal * 100`, or 0 when the goal is not positive.
#[must_use]
pub fn funded_percentage(raised: f64, goal: f64) -> f64 {
    if goal > 0.0 && raised.is_finite() { raised / goal * 100.0 } else { 0.0 }
}

/// One decimal place, e.g. `25.0`.
#[must_use]
pub fn format_percentage(percentage: f64) -> String {
    format!("{percentage:.1}")
}

/// Progress bar width in percent, clamped to `0..=100`.
#[must_use]
pub fn progress_width(raised: f64, goal: f64) -> f64 {
    funded_percentage(raised, goal).clamp(0.0, 100.0)
}

/// Totals shown on the user dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DashboardTotals {
    pub campaigns: usize,
    pub raised: f64,
    pub backers: i64,
}

impl DashboardTotals {
    #[must_use]
    pub fn from_campaigns(campaigns: &[Campaign]) -> Self {
        campaigns.iter().fold(
            Self { campaigns: campaigns.len(), ..Self::default() },
            |mut acc, c| {
                acc.raised += c.raised_amount;
                acc.backers += c.backers_count;
                acc
            },
        )
    }
}

/// Rupee amount with thousands separators and at most two decimals,
/// e.g. `1234.5` -> `"₹1,234.5"`.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    format!("₹{}", format_number(amount))
}

/// Thousands-separated number with trailing zero decimals dropped.
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    let fixed = format!("{:.2}", value.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    if frac.is_empty() { format!("{sign}{grouped}") } else { format!("{sign}{grouped}.{frac}") }
}

/// Case-insensitive text search over title, description and tags,
/// optionally restricted to one category.
#[must_use]
pub fn filter_campaigns<'a>(campaigns: &'a [Campaign], query: &str, category: Option<&str>) -> Vec<&'a Campaign> {
    let needle = query.trim().to_lowercase();
    campaigns
        .iter()
        .filter(|c| category.is_none_or(|cat| c.category.eq_ignore_ascii_case(cat)))
        .filter(|c| {
            needle.is_empty()
                || c.title.to_lowercase().contains(&needle)
                || c.description.to_lowercase().contains(&needle)
                || c.tags.iter().any(|t| t.to_lowercase().contains(&needle))
        })
        .collect()
}
