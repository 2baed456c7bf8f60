use super::*;

#[test]
fn empty_or_plain_anchor_is_ignored() {
    assert_eq!(parse_session_fragment(""), None);
    assert_eq!(parse_session_fragment("#"), None);
    assert_eq!(parse_session_fragment("#pricing"), None);
}

#[test]
fn signup_link_yields_tokens() {
    let outcome =
        parse_session_fragment("#access_token=at&refresh_token=rt&expires_in=3600&token_type=bearer&type=signup")
            .unwrap();
    let FragmentOutcome::Tokens(tokens) = outcome else {
        panic!("expected tokens");
    };
    assert_eq!(tokens.access_token, "at");
    assert_eq!(tokens.refresh_token, "rt");
    assert_eq!(tokens.expires_in, 3600);
    assert_eq!(tokens.kind.as_deref(), Some("signup"));
    assert!(!tokens.is_recovery());
}

#[test]
fn recovery_link_is_flagged() {
    let Some(FragmentOutcome::Tokens(tokens)) =
        parse_session_fragment("access_token=at&refresh_token=rt&expires_in=60&type=recovery")
    else {
        panic!("expected tokens");
    };
    assert!(tokens.is_recovery());
    assert_eq!(tokens.token_type, "bearer");
}

#[test]
fn error_description_is_decoded() {
    let outcome = parse_session_fragment("#error=access_denied&error_description=Email+link+is+invalid+or+has+expired");
    assert_eq!(
        outcome,
        Some(FragmentOutcome::Error("Email link is invalid or has expired".to_owned()))
    );
}

#[test]
fn missing_refresh_token_is_ignored() {
    assert_eq!(parse_session_fragment("#access_token=at&expires_in=60"), None);
}

#[test]
fn into_session_computes_expiry() {
    let Some(FragmentOutcome::Tokens(tokens)) =
        parse_session_fragment("#access_token=at&refresh_token=rt&expires_in=3600")
    else {
        panic!("expected tokens");
    };
    let user = IdentityUser { id: "u1".to_owned(), ..IdentityUser::default() };
    let session = tokens.into_session(user, 1_000);
    assert_eq!(session.expires_at, Some(4_600));
    assert_eq!(session.user.id, "u1");
}
