use std::sync::Arc;

use futures::executor::block_on;

use super::*;
use crate::identity::storage::MemoryStorage;

fn client() -> ApiClient {
    let config = AppConfig {
        backend_url: "https://api.fundai.test".to_owned(),
        identity_url: "https://proj.supabase.co".to_owned(),
        identity_anon_key: "anon".to_owned(),
    };
    let identity = IdentityClient::with_storage(&config, Arc::new(MemoryStorage::default()));
    ApiClient::new(&config, identity)
}

#[test]
fn url_prefixes_api_base() {
    assert_eq!(client().url("/campaigns"), "https://api.fundai.test/api/campaigns");
}

#[test]
fn path_builders_format_expected_paths() {
    assert_eq!(campaign_path("c1"), "/campaigns/c1");
    assert_eq!(monte_carlo_path("c1"), "/analytics/monte-carlo/c1");
}

#[test]
fn path_builders_encode_ids_as_one_segment() {
    assert_eq!(campaign_path("a/b c"), "/campaigns/a%2Fb%20c");
    assert_eq!(monte_carlo_path("x?y#z+1"), "/analytics/monte-carlo/x%3Fy%23z%2B1");
}

#[test]
fn verify_email_token_is_url_encoded() {
    assert_eq!(verify_email_path("a+b/c=d"), "/auth/verify-email?token=a%2Bb%2Fc%3Dd");
}

#[test]
fn error_detail_reads_string_detail() {
    assert_eq!(error_detail(r#"{"detail":"Campaign not found"}"#).as_deref(), Some("Campaign not found"));
}

#[test]
fn error_detail_joins_validation_messages() {
    let body = r#"{"detail":[{"loc":["body","title"],"msg":"field required"},{"msg":"too short"}]}"#;
    assert_eq!(error_detail(body).as_deref(), Some("field required; too short"));
}

#[test]
fn error_detail_absent_for_non_json() {
    assert_eq!(error_detail("Internal Server Error"), None);
    assert_eq!(error_detail(r#"{"error":"x"}"#), None);
}

#[test]
fn interpret_status_passes_success_body() {
    assert_eq!(interpret_status(200, "[]".to_owned()), Ok("[]".to_owned()));
}

#[test]
fn interpret_status_maps_failure_to_status_error() {
    let err = interpret_status(400, r#"{"detail":"Verification link has expired"}"#.to_owned()).unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.user_message("Verification failed"), "Verification link has expired");
}

#[test]
fn user_message_falls_back_without_detail() {
    let err = ApiError::Status { status: 500, detail: None };
    assert_eq!(err.user_message("Failed to create campaign"), "Failed to create campaign");
    assert_eq!(ApiError::Unavailable.user_message("Failed"), "Failed");
}

#[test]
fn empty_body_decodes_as_null() {
    assert_eq!(decode_body::<Value>(""), Ok(Value::Null));
    assert!(matches!(decode_body::<Vec<Campaign>>("{"), Err(ApiError::Decode(_))));
}

#[test]
fn admin_calls_require_a_session() {
    assert_eq!(block_on(client().admin_stats()), Err(ApiError::NotAuthenticated));
}

#[test]
fn public_calls_are_unavailable_off_browser() {
    assert_eq!(block_on(client().list_campaigns()), Err(ApiError::Unavailable));
}
