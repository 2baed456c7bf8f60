use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

#[test]
fn parse_known_event_names() {
    assert_eq!(AuthEvent::parse("SIGNED_IN"), AuthEvent::SignedIn);
    assert_eq!(AuthEvent::parse("SIGNED_OUT"), AuthEvent::SignedOut);
    assert_eq!(AuthEvent::parse("TOKEN_REFRESHED"), AuthEvent::TokenRefreshed);
    assert_eq!(AuthEvent::parse("PASSWORD_RECOVERY"), AuthEvent::PasswordRecovery);
}

#[test]
fn parse_unknown_event_is_other() {
    let event = AuthEvent::parse("MFA_CHALLENGE_VERIFIED");
    assert_eq!(event, AuthEvent::Other("MFA_CHALLENGE_VERIFIED".to_owned()));
    assert_eq!(event.to_string(), "MFA_CHALLENGE_VERIFIED");
}

#[test]
fn as_str_round_trips_known_names() {
    for event in [
        AuthEvent::InitialSession,
        AuthEvent::SignedIn,
        AuthEvent::SignedOut,
        AuthEvent::TokenRefreshed,
        AuthEvent::UserUpdated,
        AuthEvent::PasswordRecovery,
    ] {
        assert_eq!(AuthEvent::parse(event.as_str()), event);
    }
}

#[test]
fn emit_reaches_every_listener() {
    let listeners = SessionListeners::default();
    let hits = Arc::new(AtomicUsize::new(0));

    let a = {
        let hits = Arc::clone(&hits);
        listeners.subscribe(move |_, _| {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    };
    let b = {
        let hits = Arc::clone(&hits);
        listeners.subscribe(move |_, _| {
            hits.fetch_add(10, Ordering::SeqCst);
        })
    };

    listeners.emit(&AuthEvent::SignedOut, None);
    assert_eq!(hits.load(Ordering::SeqCst), 11);
    assert_eq!(listeners.len(), 2);
    drop((a, b));
}

#[test]
fn unsubscribe_stops_delivery() {
    let listeners = SessionListeners::default();
    let hits = Arc::new(AtomicUsize::new(0));
    let sub = {
        let hits = Arc::clone(&hits);
        listeners.subscribe(move |_, _| {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    };

    sub.unsubscribe();
    listeners.emit(&AuthEvent::SignedIn, None);

    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert!(listeners.is_empty());
}

#[test]
fn dropping_subscription_unsubscribes() {
    let listeners = SessionListeners::default();
    {
        let _sub = listeners.subscribe(|_, _| {});
        assert_eq!(listeners.len(), 1);
    }
    assert!(listeners.is_empty());
}

#[test]
fn subscription_outliving_registry_is_harmless() {
    let listeners = SessionListeners::default();
    let sub = listeners.subscribe(|_, _| {});
    drop(listeners);
    sub.unsubscribe();
}

#[test]
fn listener_may_subscribe_during_dispatch() {
    let listeners = SessionListeners::default();
    let inner = listeners.clone();
    let _sub = listeners.subscribe(move |_, _| {
        std::mem::forget(inner.subscribe(|_, _| {}));
    });

    listeners.emit(&AuthEvent::SignedIn, None);
    assert_eq!(listeners.len(), 2);
}
