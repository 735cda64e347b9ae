//! Browser `localStorage` persistence for the session blob.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`BrowserSessionStore`] is the [`SessionStore`] the auth context runs on.
//! Storage access fails quietly (private browsing, quota, SSR): a session
//! that cannot be persisted is simply absent on the next load.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use shortlink::SessionStore;
use shortlink::session::SESSION_STORAGE_KEY;

/// Read a raw string from `localStorage`.
pub fn read_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write a raw string to `localStorage`.
pub fn write_item(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("failed to persist {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key` from `localStorage`.
pub fn remove_item(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Session store backed by `localStorage[SESSION_STORAGE_KEY]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Option<String> {
        read_item(SESSION_STORAGE_KEY)
    }

    fn save(&mut self, blob: &str) {
        write_item(SESSION_STORAGE_KEY, blob);
    }

    fn clear(&mut self) {
        remove_item(SESSION_STORAGE_KEY);
    }
}
