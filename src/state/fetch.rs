//! Page data orchestration.
//!
//! DESIGN
//! ======
//! Every data-backed page keeps its rows in a [`Loadable`]. `begin()` hands
//! out a generation ticket; `finish()` applies a result only when its ticket
//! is still current, so a slow response never overwrites a newer one. A
//! failure keeps the previous rows and reports [`FinishOutcome::Failed`]
//! exactly once, which is what drives the single error toast.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::state::toast::{ToastKind, Toasts, notify};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Proof of which request a result belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FinishOutcome {
    Applied,
    Failed(String),
    /// A newer request started since this ticket was issued.
    Stale,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Loadable<T> {
    pub phase: Phase,
    pub data: Option<T>,
    pub error: Option<String>,
    generation: u64,
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self { phase: Phase::Idle, data: None, error: None, generation: 0 }
    }
}

impl<T> Loadable<T> {
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.phase = Phase::Loading;
        Ticket(self.generation)
    }

    pub fn finish(&mut self, ticket: Ticket, result: Result<T, String>) -> FinishOutcome {
        if ticket.0 != self.generation {
            return FinishOutcome::Stale;
        }
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
                self.phase = Phase::Success;
                FinishOutcome::Applied
            }
            Err(message) => {
                self.error = Some(message.clone());
                self.phase = Phase::Error;
                FinishOutcome::Failed(message)
            }
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// True while nothing has been loaded yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.data.is_none() && matches!(self.phase, Phase::Idle | Phase::Loading)
    }

    /// Edit loaded data in place (e.g. drop a row after a confirmed delete).
    pub fn modify(&mut self, f: impl FnOnce(&mut T)) {
        if let Some(data) = self.data.as_mut() {
            f(data);
        }
    }
}

impl<T: Clone> Loadable<T> {
    /// Loaded data, or `T::default()` before the first success.
    #[must_use]
    pub fn data_or_default(&self) -> T
    where
        T: Default,
    {
        self.data.clone().unwrap_or_default()
    }
}

/// Run `request` into `target`, raising one error toast with the backend's
/// detail (or `fallback`) on failure. Writes after the page unmounted are
/// dropped.
pub async fn run_fetch<T, F>(target: RwSignal<Loadable<T>>, toasts: RwSignal<Toasts>, fallback: &str, request: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, ApiError>>,
{
    let Some(ticket) = target.try_update(Loadable::begin) else {
        return;
    };
    let result = request.await.map_err(|e| {
        leptos::logging::warn!("{fallback}: {e}");
        e.user_message(fallback)
    });
    if let Some(FinishOutcome::Failed(message)) = target.try_update(|l| l.finish(ticket, result)) {
        notify(toasts, ToastKind::Error, message);
    }
}
