use std::sync::{Arc, Mutex};

use futures::executor::block_on;
use serde_json::json;

use super::storage::MemoryStorage;
use super::*;

fn config() -> AppConfig {
    AppConfig {
        backend_url: String::new(),
        identity_url: "https://proj.supabase.co".to_owned(),
        identity_anon_key: "anon".to_owned(),
    }
}

fn session_expiring_at(expires_at: i64) -> Session {
    serde_json::from_value(json!({
        "access_token": "at",
        "refresh_token": "rt",
        "expires_in": 3600,
        "expires_at": expires_at,
        "user": { "id": "u1", "email": "a@b.com" }
    }))
    .unwrap()
}

fn client_with(storage: &MemoryStorage) -> IdentityClient {
    IdentityClient::with_storage(&config(), Arc::new(storage.clone()))
}

fn recorded_events(client: &IdentityClient) -> (Arc<Mutex<Vec<String>>>, Subscription) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let sub = client.on_session_change(move |event, session| {
        let who = session.map_or("-".to_owned(), |s| s.user.id.clone());
        sink.lock().unwrap().push(format!("{event}:{who}"));
    });
    (seen, sub)
}

#[test]
fn current_session_restores_from_storage() {
    let storage = MemoryStorage::default();
    let session = session_expiring_at(now_secs() + 3600);
    save_session(&storage, "sb-proj-auth-token", &session).unwrap();

    let client = client_with(&storage);
    assert_eq!(client.current_session(), Some(session));
    assert_eq!(client.access_token().as_deref(), Some("at"));
}

#[test]
fn empty_storage_has_no_session() {
    let client = client_with(&MemoryStorage::default());
    assert_eq!(block_on(client.get_session()), Ok(None));
    assert_eq!(client.access_token(), None);
}

#[test]
fn fresh_session_is_returned_without_refresh() {
    let storage = MemoryStorage::default();
    let session = session_expiring_at(now_secs() + 3600);
    save_session(&storage, "sb-proj-auth-token", &session).unwrap();

    let client = client_with(&storage);
    assert_eq!(block_on(client.get_session()), Ok(Some(session)));
}

#[test]
fn expiring_session_triggers_refresh() {
    let storage = MemoryStorage::default();
    save_session(&storage, "sb-proj-auth-token", &session_expiring_at(now_secs() + 10)).unwrap();

    let client = client_with(&storage);
    // Host builds have no transport, so the refresh surfaces as unavailable
    // and the stored session is kept.
    assert_eq!(block_on(client.get_session()), Err(IdentityError::Unavailable));
    assert!(client.current_session().is_some());
}

#[test]
fn refresh_without_session_is_an_error() {
    let client = client_with(&MemoryStorage::default());
    assert_eq!(block_on(client.refresh_session()), Err(IdentityError::NoSession));
}

#[test]
fn accepted_session_is_persisted_and_announced() {
    let storage = MemoryStorage::default();
    let client = client_with(&storage);
    let (seen, _sub) = recorded_events(&client);

    let mut session = session_expiring_at(0);
    session.expires_at = None;
    let stored = client.accept_session(session, &AuthEvent::SignedIn);

    assert!(stored.expires_at.is_some());
    assert_eq!(load_session(&storage, "sb-proj-auth-token"), Some(stored));
    assert_eq!(*seen.lock().unwrap(), vec!["SIGNED_IN:u1".to_owned()]);
}

#[test]
fn sign_out_clears_local_state_even_when_remote_fails() {
    let storage = MemoryStorage::default();
    save_session(&storage, "sb-proj-auth-token", &session_expiring_at(now_secs() + 3600)).unwrap();
    let client = client_with(&storage);
    let (seen, _sub) = recorded_events(&client);

    block_on(client.sign_out());

    assert_eq!(client.current_session(), None);
    assert_eq!(storage.get_item("sb-proj-auth-token"), None);
    assert_eq!(*seen.lock().unwrap(), vec!["SIGNED_OUT:-".to_owned()]);
}

#[test]
fn sign_out_without_session_succeeds() {
    let client = client_with(&MemoryStorage::default());
    let (seen, _sub) = recorded_events(&client);
    block_on(client.sign_out());
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn dropped_subscription_stops_delivery() {
    let client = client_with(&MemoryStorage::default());
    let (seen, sub) = recorded_events(&client);
    drop(sub);
    block_on(client.sign_out());
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn url_detection_is_inert_off_browser() {
    let client = client_with(&MemoryStorage::default());
    assert_eq!(block_on(client.detect_session_in_url()), Ok(None));
}

#[test]
fn rejection_displays_provider_message() {
    let err = IdentityError::Rejected { status: 400, message: "Invalid login credentials".to_owned() };
    assert_eq!(err.to_string(), "Invalid login credentials");
}
