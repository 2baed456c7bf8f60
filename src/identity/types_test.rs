use serde_json::json;

use super::*;

fn session_json(app_metadata: Value) -> Value {
    json!({
        "access_token": "at-1",
        "refresh_token": "rt-1",
        "token_type": "bearer",
        "expires_in": 3600,
        "user": {
            "id": "u1",
            "email": "a@b.com",
            "user_metadata": { "name": "Ada" },
            "app_metadata": app_metadata,
        }
    })
}

// =============================================================
// Session decoding
// =============================================================

#[test]
fn session_decodes_admin_flag() {
    let session: Session = serde_json::from_value(session_json(json!({ "provider": "email", "is_admin": true }))).unwrap();
    assert_eq!(session.user.app_metadata.is_admin, Some(true));
    assert_eq!(session.user.app_metadata.provider.as_deref(), Some("email"));
    assert_eq!(session.expires_at, None);
}

#[test]
fn session_tolerates_string_admin_flag() {
    let session: Session = serde_json::from_value(session_json(json!({ "is_admin": "true" }))).unwrap();
    assert_eq!(session.user.app_metadata.is_admin, Some(true));
}

#[test]
fn session_with_null_metadata_defaults() {
    let session: Session = serde_json::from_value(session_json(Value::Null)).unwrap();
    assert_eq!(session.user.app_metadata, AppMetadata::default());
}

#[test]
fn app_metadata_keeps_unknown_keys() {
    let meta: AppMetadata = serde_json::from_value(json!({ "providers": ["email"], "is_admin": false })).unwrap();
    assert_eq!(meta.is_admin, Some(false));
    assert_eq!(meta.extra.get("providers"), Some(&json!(["email"])));
}

#[test]
fn persisted_session_round_trips() {
    let session: Session = serde_json::from_value(session_json(json!({ "is_admin": true }))).unwrap();
    let session = session.with_expiry_from(1_000);
    let raw = serde_json::to_string(&session).unwrap();
    let back: Session = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, session);
}

// =============================================================
// Expiry
// =============================================================

#[test]
fn with_expiry_from_fills_missing_expires_at() {
    let session: Session = serde_json::from_value(session_json(json!({}))).unwrap();
    assert_eq!(session.with_expiry_from(100).expires_at, Some(3_700));
}

#[test]
fn with_expiry_from_keeps_existing_expires_at() {
    let mut session: Session = serde_json::from_value(session_json(json!({}))).unwrap();
    session.expires_at = Some(50);
    assert_eq!(session.with_expiry_from(100).expires_at, Some(50));
}

#[test]
fn expires_within_uses_margin() {
    let mut session: Session = serde_json::from_value(session_json(json!({}))).unwrap();
    session.expires_at = Some(1_000);
    assert!(session.expires_within(950, 90));
    assert!(!session.expires_within(800, 90));
    assert!(session.expires_within(2_000, 0));
}

#[test]
fn expiry_math_saturates_on_extreme_values() {
    let mut session: Session = serde_json::from_value(session_json(json!({}))).unwrap();
    session.expires_in = i64::MAX;
    assert_eq!(session.clone().with_expiry_from(100).expires_at, Some(i64::MAX));

    session.expires_at = Some(i64::MIN);
    assert!(session.expires_within(i64::MAX, 90));
    session.expires_at = Some(i64::MAX);
    assert!(!session.expires_within(i64::MIN, 90));
}

#[test]
fn unknown_expiry_never_expires() {
    let session: Session = serde_json::from_value(session_json(json!({}))).unwrap();
    assert!(!session.expires_within(i64::MAX / 2, 90));
}

// =============================================================
// Sign-up responses
// =============================================================

#[test]
fn signup_with_session_is_signed_in() {
    let outcome = parse_signup_response(session_json(json!({}))).unwrap();
    assert!(matches!(outcome, SignUpOutcome::SignedIn(s) if s.access_token == "at-1"));
}

#[test]
fn signup_bare_user_is_pending() {
    let outcome = parse_signup_response(json!({ "id": "u9", "email": "x@y.z" })).unwrap();
    assert_eq!(
        outcome,
        SignUpOutcome::PendingVerification { user_id: "u9".to_owned(), email: Some("x@y.z".to_owned()) }
    );
}

#[test]
fn signup_wrapped_user_is_pending() {
    let outcome = parse_signup_response(json!({ "user": { "id": "u9" }, "session": null })).unwrap();
    assert_eq!(outcome, SignUpOutcome::PendingVerification { user_id: "u9".to_owned(), email: None });
}

// =============================================================
// Provider error messages
// =============================================================

#[test]
fn provider_error_prefers_description() {
    let body = json!({ "error": "invalid_grant", "error_description": "Invalid login credentials" });
    assert_eq!(provider_error_message(&body).as_deref(), Some("Invalid login credentials"));
}

#[test]
fn provider_error_falls_back_to_msg() {
    let body = json!({ "code": 422, "msg": "User already registered" });
    assert_eq!(provider_error_message(&body).as_deref(), Some("User already registered"));
}

#[test]
fn provider_error_none_for_unrelated_body() {
    assert_eq!(provider_error_message(&json!({ "code": 500 })), None);
}
