use super::*;

#[test]
fn token_url_includes_grant_type() {
    assert_eq!(
        token_url("https://x.supabase.co", "password"),
        "https://x.supabase.co/auth/v1/token?grant_type=password"
    );
}

#[test]
fn auth_url_joins_path() {
    assert_eq!(auth_url("http://localhost:54321", "signup"), "http://localhost:54321/auth/v1/signup");
}

#[test]
fn success_with_json_body_is_parsed() {
    let value = interpret_response(200, r#"{"access_token":"at"}"#).unwrap();
    assert_eq!(value["access_token"], "at");
}

#[test]
fn success_with_empty_body_is_null() {
    assert_eq!(interpret_response(204, "").unwrap(), Value::Null);
}

#[test]
fn rejection_carries_provider_message() {
    let err = interpret_response(400, r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#)
        .unwrap_err();
    assert_eq!(
        err,
        IdentityError::Rejected { status: 400, message: "Invalid login credentials".to_owned() }
    );
    assert_eq!(err.to_string(), "Invalid login credentials");
}

#[test]
fn rejection_without_message_uses_status() {
    let err = interpret_response(502, "<html>bad gateway</html>").unwrap_err();
    assert_eq!(
        err,
        IdentityError::Rejected { status: 502, message: "identity request failed with status 502".to_owned() }
    );
}

#[test]
fn decode_reports_shape_errors() {
    let err = decode::<Session>(json!({ "access_token": 5 })).unwrap_err();
    assert!(matches!(err, IdentityError::Decode(_)));
}
