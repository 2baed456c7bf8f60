//! Durable session persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build keeps the session JSON in `localStorage` so a reload
//! restores it without signing in again. Non-browser builds and tests use
//! [`MemoryStorage`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use super::IdentityError;
use super::types::Session;

/// Key/value store that survives page reloads.
pub trait SessionStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`IdentityError::Storage`] when the backing store rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), IdentityError>;

    fn remove_item(&self, key: &str);
}

/// `localStorage` under the `csr` feature; a no-op elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), IdentityError> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or_else(|| IdentityError::Storage("localStorage unavailable".to_owned()))?;
            storage
                .set_item(key, value)
                .map_err(|e| IdentityError::Storage(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// In-process storage for tests and non-browser builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), IdentityError> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// Storage key for a project, matching the provider SDK's naming.
#[must_use]
pub fn storage_key(project_ref: &str) -> String {
    format!("sb-{project_ref}-auth-token")
}

/// Read the persisted session. Corrupt entries are removed.
pub fn load_session(storage: &dyn SessionStorage, key: &str) -> Option<Session> {
    let raw = storage.get_item(key)?;
    if let Ok(session) = serde_json::from_str::<Session>(&raw) {
        Some(session)
    } else {
        storage.remove_item(key);
        None
    }
}

/// Persist `session` under `key`.
///
/// # Errors
///
/// Returns [`IdentityError::Storage`] when encoding or the write fails.
pub fn save_session(storage: &dyn SessionStorage, key: &str, session: &Session) -> Result<(), IdentityError> {
    let raw = serde_json::to_string(session).map_err(|e| IdentityError::Storage(e.to_string()))?;
    storage.set_item(key, &raw)
}
