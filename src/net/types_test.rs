use serde_json::json;

use super::*;

// =============================================================
// Campaign
// =============================================================

#[test]
fn campaign_accepts_mixed_number_shapes() {
    let campaign: Campaign = serde_json::from_value(json!({
        "id": 42,
        "title": "Solar Lamp",
        "goal_amount": "1000",
        "raised_amount": 250.5,
        "backers_count": null,
        "tags": null,
        "reward_tiers": [{ "amount": "500", "description": "Lamp" }]
    }))
    .unwrap();

    assert_eq!(campaign.id, "42");
    assert!((campaign.goal_amount - 1000.0).abs() < f64::EPSILON);
    assert!((campaign.raised_amount - 250.5).abs() < f64::EPSILON);
    assert_eq!(campaign.backers_count, 0);
    assert!(campaign.tags.is_empty());
    assert_eq!(campaign.reward_tiers.len(), 1);
    assert!((campaign.reward_tiers[0].amount - 500.0).abs() < f64::EPSILON);
}

#[test]
fn campaign_rejects_non_numeric_goal() {
    let result = serde_json::from_value::<Campaign>(json!({ "id": "c1", "title": "x", "goal_amount": "lots" }));
    assert!(result.is_err());
}

#[test]
fn campaign_list_decodes() {
    let list: Vec<Campaign> = serde_json::from_value(json!([
        { "id": "a", "title": "A", "status": "active" },
        { "id": "b", "title": "B", "status": null }
    ]))
    .unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].status, "active");
    assert_eq!(list[1].status, "");
}

// =============================================================
// Admin
// =============================================================

#[test]
fn admin_stats_decodes_backend_names() {
    let stats: AdminStats = serde_json::from_value(json!({
        "total_campaigns": 15,
        "active_campaigns": 12,
        "total_users": 7,
        "total_raised": 123_456.0
    }))
    .unwrap();
    assert_eq!(stats.total_campaigns, 15);
    assert_eq!(stats.active_campaigns, 12);
    assert_eq!(stats.total_users, 7);
    assert!((stats.total_raised - 123_456.0).abs() < f64::EPSILON);
}

#[test]
fn admin_user_initial_prefers_name() {
    let user = AdminUser { id: "u".into(), email: "zed@x.io".into(), name: Some("amy".into()), ..AdminUser::default() };
    assert_eq!(user.initial(), "A");
    let anon = AdminUser { name: None, ..user.clone() };
    assert_eq!(anon.initial(), "Z");
}

#[test]
fn admin_user_role_label() {
    let mut user = AdminUser::default();
    assert_eq!(user.role_label(), "user");
    user.is_admin = true;
    assert_eq!(user.role_label(), "admin");
}

// =============================================================
// Analytics + AI
// =============================================================

#[test]
fn monte_carlo_result_decodes() {
    let result: MonteCarloResult = serde_json::from_value(json!({
        "pessimistic": 400,
        "realistic": 900.5,
        "optimistic": 1500,
        "success_probability": 62.4,
        "progression_data": [{ "day": 1, "amount": 10 }, { "day": 2, "amount": 25.5 }],
        "key_insights": ["a", "b"]
    }))
    .unwrap();
    assert_eq!(result.progression_data.len(), 2);
    assert_eq!(result.progression_data[1].day, 2);
    assert_eq!(result.key_insights, vec!["a".to_owned(), "b".to_owned()]);
}

#[test]
fn monte_carlo_result_tolerates_missing_fields() {
    let result: MonteCarloResult = serde_json::from_value(json!({})).unwrap();
    assert_eq!(result, MonteCarloResult::default());
}

#[test]
fn ai_brief_omits_unset_optionals() {
    let brief = AiCampaignBrief {
        title: "t".into(),
        description: "d".into(),
        category: "Art".into(),
        goal_amount: None,
        reward_tiers: None,
    };
    let value = serde_json::to_value(&brief).unwrap();
    assert_eq!(value, json!({ "title": "t", "description": "d", "category": "Art" }));
}

#[test]
fn marketing_strategy_channels_are_optional() {
    let response: MarketingStrategyResponse = serde_json::from_value(json!({ "overview": "Go" })).unwrap();
    assert_eq!(response.overview, "Go");
    assert!(response.channels.is_none());
}
