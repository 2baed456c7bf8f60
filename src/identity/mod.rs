//! Client for the hosted identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity provider owns the session. This client wraps its REST API,
//! persists the session to durable storage, refreshes the access token before
//! it expires, and reports every change to subscribers. Application code
//! never writes a session itself; it only mirrors what this client emits.
//!
//! ERROR HANDLING
//! ==============
//! Provider rejections keep the provider's message so the UI can show it
//! verbatim. `sign_out` clears local state even when the remote call fails;
//! the failed revoke is only logged.

pub mod events;
pub mod fragment;
mod refresh;
pub mod storage;
mod transport;
pub mod types;

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::{Arc, Mutex, PoisonError};

use serde_json::Value;

use crate::config::AppConfig;

pub use self::events::{AuthEvent, SessionListeners, Subscription};
use self::refresh::RefreshGate;
use self::storage::{BrowserStorage, SessionStorage, load_session, save_session, storage_key};
use self::transport::Endpoint;
pub use self::types::{AppMetadata, IdentityUser, Session, SignUpOutcome};

/// Seconds between background expiry checks.
pub const AUTO_REFRESH_TICK_SECS: u64 = 30;
/// Refresh when the access token expires within this many seconds.
pub const REFRESH_MARGIN_SECS: i64 = 90;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("identity request failed: {0}")]
    Http(String),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("unexpected identity response: {0}")]
    Decode(String),
    #[error("session storage error: {0}")]
    Storage(String),
    #[error("no active session")]
    NoSession,
    #[error("identity service is not available in this build")]
    Unavailable,
}

#[derive(Default)]
struct SessionSlot {
    restored: bool,
    current: Option<Session>,
}

struct Inner {
    endpoint: Endpoint,
    storage_key: String,
    storage: Arc<dyn SessionStorage>,
    slot: Mutex<SessionSlot>,
    refresh: RefreshGate,
    listeners: SessionListeners,
}

/// Shared handle to the identity provider. Cheap to clone.
#[derive(Clone)]
pub struct IdentityClient {
    inner: Arc<Inner>,
}

impl IdentityClient {
    /// Client backed by browser `localStorage`.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self::with_storage(config, Arc::new(BrowserStorage))
    }

    #[must_use]
    pub fn with_storage(config: &AppConfig, storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            inner: Arc::new(Inner {
                endpoint: Endpoint {
                    base_url: config.identity_url.clone(),
                    anon_key: config.identity_anon_key.clone(),
                },
                storage_key: storage_key(&config.identity_project_ref()),
                storage,
                slot: Mutex::new(SessionSlot::default()),
                refresh: RefreshGate::default(),
                listeners: SessionListeners::default(),
            }),
        }
    }

    /// Register a session-change listener.
    pub fn on_session_change<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&AuthEvent, Option<&Session>) + Send + Sync + 'static,
    {
        self.inner.listeners.subscribe(listener)
    }

    /// The cached session, restored from storage on first access. Performs no
    /// network I/O and does not check expiry.
    #[must_use]
    pub fn current_session(&self) -> Option<Session> {
        let mut slot = self.lock_slot();
        if !slot.restored {
            slot.restored = true;
            slot.current = load_session(self.inner.storage.as_ref(), &self.inner.storage_key);
        }
        slot.current.clone()
    }

    /// Bearer token for backend requests.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.current_session().map(|s| s.access_token)
    }

    /// The current session, refreshed first when it is about to expire.
    ///
    /// # Errors
    ///
    /// Returns an error when a due refresh fails. A rejected refresh also
    /// clears the session.
    pub async fn get_session(&self) -> Result<Option<Session>, IdentityError> {
        let Some(session) = self.current_session() else {
            return Ok(None);
        };
        if !session.expires_within(now_secs(), REFRESH_MARGIN_SECS) {
            return Ok(Some(session));
        }
        self.refresh_session().await.map(Some)
    }

    /// Sign in with email and password. Emits `SIGNED_IN` on success.
    ///
    /// # Errors
    ///
    /// Returns the provider's rejection (e.g. invalid credentials) or a
    /// transport error.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, IdentityError> {
        let session = transport::password_grant(&self.inner.endpoint, email, password).await?;
        Ok(self.accept_session(session, &AuthEvent::SignedIn))
    }

    /// Register a new account with `metadata` stored as user metadata.
    ///
    /// # Errors
    ///
    /// Returns the provider's rejection (e.g. already registered) or a
    /// transport error.
    pub async fn sign_up(&self, email: &str, password: &str, metadata: Value) -> Result<SignUpOutcome, IdentityError> {
        match transport::signup(&self.inner.endpoint, email, password, &metadata).await? {
            SignUpOutcome::SignedIn(session) => {
                Ok(SignUpOutcome::SignedIn(self.accept_session(session, &AuthEvent::SignedIn)))
            }
            pending @ SignUpOutcome::PendingVerification { .. } => Ok(pending),
        }
    }

    /// Sign out. Local session state is always cleared and `SIGNED_OUT`
    /// emitted. A failed remote revoke is logged; already-invalid tokens are
    /// not worth a warning.
    pub async fn sign_out(&self) {
        if let Some(token) = self.access_token() {
            match transport::logout(&self.inner.endpoint, &token).await {
                Ok(()) | Err(IdentityError::Rejected { status: 401 | 403 | 404, .. }) => {}
                Err(e) => leptos::logging::warn!("remote sign-out failed: {e}"),
            }
        }
        self.clear_session();
    }

    /// Exchange the refresh token for a new session. Emits `TOKEN_REFRESHED`.
    /// Concurrent callers share a single grant.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::NoSession`] without a session; a rejection
    /// also clears the session.
    pub async fn refresh_session(&self) -> Result<Session, IdentityError> {
        self.inner.refresh.run(self.refresh_grant()).await
    }

    async fn refresh_grant(&self) -> Result<Session, IdentityError> {
        let current = self.current_session().ok_or(IdentityError::NoSession)?;
        match transport::refresh_grant(&self.inner.endpoint, &current.refresh_token).await {
            Ok(session) => Ok(self.accept_session(session, &AuthEvent::TokenRefreshed)),
            Err(err @ IdentityError::Rejected { .. }) => {
                self.clear_session();
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Pick up a session delivered in the URL fragment by an email link.
    /// Emits `SIGNED_IN`, or `PASSWORD_RECOVERY` for recovery links.
    ///
    /// # Errors
    ///
    /// Returns the provider's error when the link carried one, or a transport
    /// error while fetching the user.
    pub async fn detect_session_in_url(&self) -> Result<Option<Session>, IdentityError> {
        let Some(hash) = crate::util::browser::location_hash() else {
            return Ok(None);
        };
        match fragment::parse_session_fragment(&hash) {
            None => Ok(None),
            Some(fragment::FragmentOutcome::Error(message)) => {
                crate::util::browser::clear_location_hash();
                Err(IdentityError::Rejected { status: 400, message })
            }
            Some(fragment::FragmentOutcome::Tokens(tokens)) => {
                let user = transport::fetch_user(&self.inner.endpoint, &tokens.access_token).await?;
                crate::util::browser::clear_location_hash();
                let event = if tokens.is_recovery() { AuthEvent::PasswordRecovery } else { AuthEvent::SignedIn };
                let session = tokens.into_session(user, now_secs());
                Ok(Some(self.accept_session(session, &event)))
            }
        }
    }

    /// Start the background refresh loop. Browser builds only.
    pub fn start_auto_refresh(&self) {
        #[cfg(feature = "csr")]
        {
            let client = self.clone();
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::sleep(std::time::Duration::from_secs(AUTO_REFRESH_TICK_SECS)).await;
                    let due = client
                        .current_session()
                        .is_some_and(|s| s.expires_within(now_secs(), REFRESH_MARGIN_SECS));
                    if due {
                        if let Err(e) = client.refresh_session().await {
                            leptos::logging::warn!("token refresh failed: {e}");
                        }
                    }
                }
            });
        }
    }

    /// Store `session` as current, persist it and notify listeners.
    fn accept_session(&self, session: Session, event: &AuthEvent) -> Session {
        let session = session.with_expiry_from(now_secs());
        if let Err(e) = save_session(self.inner.storage.as_ref(), &self.inner.storage_key, &session) {
            leptos::logging::warn!("failed to persist session: {e}");
        }
        {
            let mut slot = self.lock_slot();
            slot.restored = true;
            slot.current = Some(session.clone());
        }
        self.inner.listeners.emit(event, Some(&session));
        session
    }

    fn clear_session(&self) {
        self.inner.storage.remove_item(&self.inner.storage_key);
        {
            let mut slot = self.lock_slot();
            slot.restored = true;
            slot.current = None;
        }
        self.inner.listeners.emit(&AuthEvent::SignedOut, None);
    }

    fn lock_slot(&self) -> std::sync::MutexGuard<'_, SessionSlot> {
        self.inner.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Current unix time in seconds.
#[must_use]
pub fn now_secs() -> i64 {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let secs = (js_sys::Date::now() / 1000.0) as i64;
        secs
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}
