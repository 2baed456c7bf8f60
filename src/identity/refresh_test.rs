use std::cell::Cell;

use futures::channel::oneshot;
use futures::executor::block_on;
use futures::{FutureExt, join};
use serde_json::json;

use super::*;

fn session(access_token: &str) -> Session {
    serde_json::from_value(json!({
        "access_token": access_token,
        "refresh_token": "rt-2",
        "expires_in": 3600,
        "user": { "id": "u1" }
    }))
    .unwrap()
}

#[test]
fn concurrent_callers_share_one_grant() {
    let gate = RefreshGate::default();
    let grants = Cell::new(0);
    let (release, released) = oneshot::channel::<()>();

    let counter = &grants;
    let grant = move |released: Option<oneshot::Receiver<()>>| {
        let grants = counter;
        async move {
            grants.set(grants.get() + 1);
            if let Some(rx) = released {
                let _ = rx.await;
            }
            Ok(session("at-2"))
        }
    };

    let (first, second, ()) = block_on(async {
        join!(gate.run(grant(Some(released))), gate.run(grant(None)), async {
            let _ = release.send(());
        })
    });

    assert_eq!(grants.get(), 1);
    assert_eq!(first.unwrap().access_token, "at-2");
    assert_eq!(second.unwrap().access_token, "at-2");
    assert!(!gate.in_flight());
}

#[test]
fn waiters_receive_the_leaders_error() {
    let gate = RefreshGate::default();
    let (release, released) = oneshot::channel::<()>();
    let rejected = IdentityError::Rejected { status: 400, message: "Invalid Refresh Token".to_owned() };

    let leader = {
        let rejected = rejected.clone();
        async move {
            let _ = released.await;
            Err(rejected)
        }
    };

    let (first, second, ()) = block_on(async {
        join!(gate.run(leader), gate.run(async { Ok(session("unused")) }), async {
            let _ = release.send(());
        })
    });

    assert_eq!(first, Err(rejected.clone()));
    assert_eq!(second, Err(rejected));
}

#[test]
fn sequential_refreshes_each_run_their_grant() {
    let gate = RefreshGate::default();
    assert_eq!(block_on(gate.run(async { Ok(session("a")) })).unwrap().access_token, "a");
    assert_eq!(block_on(gate.run(async { Ok(session("b")) })).unwrap().access_token, "b");
}

#[test]
fn cancelled_leader_reopens_the_gate() {
    let gate = RefreshGate::default();
    {
        let mut pending = Box::pin(gate.run(futures::future::pending()));
        assert!((&mut pending).now_or_never().is_none());
        assert!(gate.in_flight());
    }
    assert!(!gate.in_flight());
    assert_eq!(block_on(gate.run(async { Ok(session("c")) })).unwrap().access_token, "c");
}
