//! Thin wrappers over `window` APIs.
//!
//! Client-side (csr) these touch the real browser; elsewhere they are inert
//! so callers need no `cfg` of their own.

/// Full page navigation (not a router push), reloading app state.
pub fn hard_navigate(path: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
    }
}

/// Native confirmation dialog. Always `false` off-browser.
#[must_use]
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}

/// Current `location.hash`, `None` when empty.
#[must_use]
pub fn location_hash() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let hash = web_sys::window()?.location().hash().ok()?;
        (!hash.is_empty() && hash != "#").then_some(hash)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Drop the fragment from the address bar without adding a history entry.
pub fn clear_location_hash() {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let path = location.pathname().unwrap_or_default();
        let search = location.search().unwrap_or_default();
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&format!("{path}{search}")));
        }
    }
}
