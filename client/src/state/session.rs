//! Bearer-credential session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The HTTP middleware, the auth service and the route guard all share one
//! `Session` handle. It is provided through Leptos context and injected into
//! the API client, never looked up through browser globals directly, so the
//! whole request lifecycle runs natively in tests against `MemoryStorage`.
//!
//! DESIGN
//! ======
//! There is at most one credential. Writes are last-write-wins and nothing
//! tracks expiry locally; the API server is the only authority on validity.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::config::SESSION_TOKEN_KEY;

/// Durable string key-value storage backing a [`Session`].
pub trait TokenStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// Process-local storage. Used natively and by tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        let items = self.items.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        items.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        let mut items = self.items.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        items.insert(key.to_owned(), value.to_owned());
    }

    fn remove_item(&self, key: &str) {
        let mut items = self.items.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        items.remove(key);
    }
}

/// `window.localStorage`, scoped to the page origin.
///
/// Holds no handle itself; every call re-resolves the storage object so the
/// type stays `Send + Sync` for Leptos context.
#[cfg(feature = "csr")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable; session will not persist");
        }
        storage
    }
}

#[cfg(feature = "csr")]
impl TokenStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("failed to write {key} to localStorage");
        }
    }

    fn remove_item(&self, key: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if storage.remove_item(key).is_err() {
            log::warn!("failed to remove {key} from localStorage");
        }
    }
}

/// Shared handle to the single stored credential.
#[derive(Clone)]
pub struct Session {
    storage: Arc<dyn TokenStorage>,
    key: &'static str,
}

impl Session {
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        Self { storage, key: SESSION_TOKEN_KEY }
    }

    /// Session backed by a fresh [`MemoryStorage`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Session backed by the browser's `localStorage`.
    #[cfg(feature = "csr")]
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserStorage))
    }

    /// Store `token`, replacing any previous credential.
    pub fn set(&self, token: &str) {
        self.storage.set_item(self.key, token);
    }

    /// Current credential. An empty stored value counts as absent.
    pub fn get(&self) -> Option<String> {
        self.storage.get_item(self.key).filter(|token| !token.is_empty())
    }

    pub fn clear(&self) {
        self.storage.remove_item(self.key);
    }

    pub fn is_present(&self) -> bool {
        self.get().is_some()
    }
}

/// Session for the current build target: `localStorage` in the browser,
/// memory elsewhere.
pub fn default_session() -> Session {
    #[cfg(feature = "csr")]
    {
        Session::browser()
    }
    #[cfg(not(feature = "csr"))]
    {
        Session::in_memory()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("key", &self.key)
            .field("present", &self.is_present())
            .finish()
    }
}
