//! Single-flight guard for token refreshes.
//!
//! The provider rotates refresh tokens, so two grants racing on the same
//! token can get the second one rejected as reused. Every caller that asks
//! for a refresh while one is in flight waits for that one's result.

#[cfg(test)]
#[path = "refresh_test.rs"]
mod refresh_test;

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use futures::channel::oneshot;

use super::IdentityError;
use super::types::Session;

type RefreshResult = Result<Session, IdentityError>;

#[derive(Default)]
pub(crate) struct RefreshGate {
    /// `Some` while a refresh is in flight; holds the callers waiting on it.
    waiters: Mutex<Option<Vec<oneshot::Sender<RefreshResult>>>>,
}

enum Turn {
    Lead,
    Follow(oneshot::Receiver<RefreshResult>),
}

impl RefreshGate {
    /// Run `grant` unless a refresh is already in flight, in which case wait
    /// for that refresh instead. `grant` is only polled by the leading caller.
    pub(crate) async fn run<F>(&self, grant: F) -> RefreshResult
    where
        F: Future<Output = RefreshResult>,
    {
        match self.join() {
            Turn::Follow(rx) => rx
                .await
                .unwrap_or_else(|_| Err(IdentityError::Http("token refresh was abandoned".to_owned()))),
            Turn::Lead => {
                let lead = Lead { gate: self };
                let result = grant.await;
                lead.finish(&result);
                result
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn in_flight(&self) -> bool {
        self.lock().is_some()
    }

    fn join(&self) -> Turn {
        let mut waiters = self.lock();
        if let Some(list) = waiters.as_mut() {
            let (tx, rx) = oneshot::channel();
            list.push(tx);
            Turn::Follow(rx)
        } else {
            *waiters = Some(Vec::new());
            Turn::Lead
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Vec<oneshot::Sender<RefreshResult>>>> {
        self.waiters.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Held by the leading caller. Dropping it without `finish` (the leading
/// future was cancelled) reopens the gate and wakes waiters with an error.
struct Lead<'a> {
    gate: &'a RefreshGate,
}

impl Lead<'_> {
    fn finish(self, result: &RefreshResult) {
        let waiters = self.gate.lock().take().unwrap_or_default();
        for tx in waiters {
            let _ = tx.send(result.clone());
        }
    }
}

impl Drop for Lead<'_> {
    fn drop(&mut self) {
        self.gate.lock().take();
    }
}
