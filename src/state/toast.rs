//! Transient notifications.
//!
//! Toasts are pushed into a signal and dropped again after
//! [`TOAST_TTL_MS`] by a browser timer, or earlier when dismissed.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// How long a toast stays on screen.
pub const TOAST_TTL_MS: u64 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
            Self::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Toasts {
    pub items: Vec<Toast>,
}

impl Toasts {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.items.push(Toast { id: id.clone(), kind, message: message.into() });
        id
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    #[must_use]
    pub fn count(&self, kind: ToastKind) -> usize {
        self.items.iter().filter(|t| t.kind == kind).count()
    }
}

/// Show a toast and schedule its removal.
pub fn notify(toasts: RwSignal<Toasts>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    if kind == ToastKind::Error {
        leptos::logging::warn!("{message}");
    }
    let Some(id) = toasts.try_update(|t| t.push(kind, message)) else {
        return;
    };
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_TTL_MS)).await;
        toasts.try_update(|t| t.dismiss(&id));
    });
    #[cfg(not(feature = "csr"))]
    let _ = id;
}
