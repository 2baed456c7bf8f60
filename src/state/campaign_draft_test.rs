use super::*;

fn filled() -> CampaignDraft {
    CampaignDraft {
        title: "Solar Lamp".to_owned(),
        description: "A lamp for every village".to_owned(),
        category: "Environment".to_owned(),
        goal_amount: "50000".to_owned(),
        ..CampaignDraft::default()
    }
}

// =============================================================
// Defaults + validation
// =============================================================

#[test]
fn default_draft_has_one_empty_tier_and_thirty_days() {
    let draft = CampaignDraft::default();
    assert_eq!(draft.reward_tiers.len(), 1);
    assert_eq!(draft.duration_days, 30);
    assert_eq!(draft.status, CampaignStatus::Active);
}

#[test]
fn missing_basics_fail_validation() {
    let mut draft = filled();
    draft.category = "  ".to_owned();
    assert_eq!(draft.validate(), Err(DraftError::MissingRequiredFields));
    assert_eq!(draft.validate().unwrap_err().to_string(), "Please fill in all required fields");
}

#[test]
fn non_positive_goal_is_rejected() {
    let mut draft = filled();
    draft.goal_amount = "0".to_owned();
    assert_eq!(draft.validate(), Err(DraftError::InvalidGoalAmount));
    draft.goal_amount = "abc".to_owned();
    assert_eq!(draft.validate(), Err(DraftError::InvalidGoalAmount));
}

#[test]
fn duration_input_is_clamped() {
    let mut draft = filled();
    draft.set_duration("90");
    assert_eq!(draft.duration_days, 60);
    draft.set_duration("0");
    assert_eq!(draft.duration_days, 1);
    draft.set_duration("");
    assert_eq!(draft.duration_days, 30);
}

// =============================================================
// Tags + tiers
// =============================================================

#[test]
fn tags_are_trimmed_and_deduplicated() {
    let mut draft = filled();
    assert!(draft.add_tag("  solar "));
    assert!(!draft.add_tag("solar"));
    assert!(!draft.add_tag("   "));
    assert_eq!(draft.tags, vec!["solar".to_owned()]);
    draft.remove_tag("solar");
    assert!(draft.tags.is_empty());
}

#[test]
fn last_tier_cannot_be_removed() {
    let mut draft = filled();
    assert!(!draft.remove_tier(0));
    draft.add_tier();
    assert!(draft.remove_tier(1));
    assert_eq!(draft.reward_tiers.len(), 1);
    assert!(!draft.remove_tier(5));
}

#[test]
fn update_tier_sets_field() {
    let mut draft = filled();
    draft.update_tier(0, TierField::Amount, "500".to_owned());
    draft.update_tier(0, TierField::Description, "Lamp".to_owned());
    draft.update_tier(9, TierField::Amount, "1".to_owned());
    assert_eq!(draft.reward_tiers[0], TierDraft { amount: "500".to_owned(), description: "Lamp".to_owned() });
}

// =============================================================
// Payload
// =============================================================

#[test]
fn payload_drops_incomplete_tiers() {
    let mut draft = filled();
    draft.reward_tiers = vec![
        TierDraft { amount: "500".to_owned(), description: "Lamp".to_owned() },
        TierDraft { amount: String::new(), description: "No amount".to_owned() },
        TierDraft { amount: "100".to_owned(), description: " ".to_owned() },
    ];
    let payload = draft.to_payload().unwrap();
    assert_eq!(payload.reward_tiers, vec![RewardTier { amount: 500.0, description: "Lamp".to_owned() }]);
}

#[test]
fn payload_converts_fields() {
    let mut draft = filled();
    draft.status = CampaignStatus::Draft;
    draft.add_tag("green");
    let payload = draft.to_payload().unwrap();
    assert!((payload.goal_amount - 50_000.0).abs() < f64::EPSILON);
    assert_eq!(payload.duration_days, 30);
    assert_eq!(payload.status, "draft");
    assert_eq!(payload.tags, vec!["green".to_owned()]);
    assert_eq!(payload.image_url, None);
}

#[test]
fn payload_requires_valid_draft() {
    assert_eq!(CampaignDraft::default().to_payload(), Err(DraftError::MissingRequiredFields));
}

#[test]
fn ai_brief_attaches_goal_and_tiers_on_request() {
    let mut draft = filled();
    draft.update_tier(0, TierField::Amount, "250".to_owned());
    draft.update_tier(0, TierField::Description, "Sticker".to_owned());

    let plain = draft.ai_brief(false, false);
    assert_eq!(plain.goal_amount, None);
    assert_eq!(plain.reward_tiers, None);

    let full = draft.ai_brief(true, true);
    assert_eq!(full.goal_amount, Some(50_000.0));
    assert_eq!(full.reward_tiers.map(|t| t.len()), Some(1));
}

// =============================================================
// Wizard steps
// =============================================================

#[test]
fn wizard_blocks_incomplete_basics() {
    let draft = CampaignDraft::default();
    assert_eq!(WizardStep::Basics.advance(&draft), Err(DraftError::MissingRequiredFields));
    assert_eq!(WizardStep::Basics.advance(&filled()), Ok(WizardStep::RewardTiers));
}

#[test]
fn wizard_steps_are_bounded() {
    assert_eq!(WizardStep::AiOptimization.next(), WizardStep::AiOptimization);
    assert_eq!(WizardStep::Basics.prev(), WizardStep::Basics);
    assert_eq!(WizardStep::RewardTiers.advance(&CampaignDraft::default()), Ok(WizardStep::AiOptimization));
    assert!(WizardStep::AiOptimization.is_last());
    let numbers: Vec<u8> = WizardStep::ALL.iter().map(|s| s.number()).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[test]
fn status_parses_wire_names() {
    assert_eq!(CampaignStatus::parse("draft"), CampaignStatus::Draft);
    assert_eq!(CampaignStatus::parse("active"), CampaignStatus::Active);
    assert_eq!(CampaignStatus::Draft.as_str(), "draft");
}
