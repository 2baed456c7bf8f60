use super::*;

#[test]
fn failure_message_maps_400_to_expired() {
    let error = ApiError::Status { status: 400, detail: Some("Token expired".to_owned()) };
    assert_eq!(failure_message(&error), EXPIRED_LINK);
}

#[test]
fn failure_message_prefers_backend_detail() {
    let error = ApiError::Status { status: 404, detail: Some("User not found".to_owned()) };
    assert_eq!(failure_message(&error), "User not found");
}

#[test]
fn failure_message_falls_back_without_detail() {
    assert_eq!(failure_message(&ApiError::Http("offline".to_owned())), VERIFICATION_FAILED);
    assert_eq!(
        failure_message(&ApiError::Status { status: 500, detail: None }),
        VERIFICATION_FAILED
    );
}

#[test]
fn usable_token_rejects_missing_and_blank() {
    assert_eq!(usable_token(None), None);
    assert_eq!(usable_token(Some("  ".to_owned())), None);
    assert_eq!(usable_token(Some("abc".to_owned())), Some("abc".to_owned()));
}
