//! Session
//!
//! The single auth token, behind an injectable store so views and the API
//! client never reach for `localStorage` directly.

use std::sync::Arc;

/// Persistent home of the session token
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Browser `localStorage` under a fixed key
pub struct LocalStorageTokenStore {
    key: String,
}

impl LocalStorageTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok().flatten()
    }

    fn set(&self, token: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(&self.key, token).is_err() {
                    log::error!("[SESSION] Failed to persist token");
                }
            }
            None => log::error!("[SESSION] localStorage unavailable"),
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}

/// In-memory store
#[cfg(test)]
#[derive(Default)]
pub struct MemoryTokenStore {
    token: std::sync::Mutex<Option<String>>,
}

#[cfg(test)]
impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self { token: std::sync::Mutex::new(Some(token.to_string())) }
    }
}

#[cfg(test)]
impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.lock().ok().and_then(|t| t.clone())
    }

    fn set(&self, token: &str) {
        if let Ok(mut t) = self.token.lock() {
            *t = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut t) = self.token.lock() {
            *t = None;
        }
    }
}

/// Handle to the current session, cheap to clone
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self { store: Arc::new(store) }
    }

    /// Token, if any. Blank tokens count as absent.
    pub fn token(&self) -> Option<String> {
        self.store.get().filter(|t| !t.trim().is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn login(&self, token: &str) {
        log::info!("[SESSION] Logged in");
        self.store.set(token);
    }

    pub fn logout(&self) {
        log::info!("[SESSION] Logged out");
        self.store.clear();
    }
}
