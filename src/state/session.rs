//! Browser-persisted auth session with a load/save/clear contract.
//!
//! DESIGN
//! ======
//! The store is an explicit service passed to the guard and the API client
//! via context instead of an ambient global, so tests can substitute the
//! in-memory backend. A session is all-or-nothing: a token without a
//! parseable user record (or vice versa) is treated as absent, and the
//! offending keys are removed so the next load does not trip over them
//! again.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::net::types::User;

const TOKEN_KEY: &str = "derslik_token";
const USER_KEY: &str = "derslik_user";

/// The client-held proof of authentication: bearer token plus cached
/// profile of the account it was issued to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Opaque bearer token; injected into authenticated requests.
    pub token: String,
    /// Cached profile from the login response.
    pub user: User,
}

/// String key/value persistence the session store writes through.
pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `localStorage`-backed persistence. Requires a browser environment; every
/// call resolves the window fresh so no JS handle is held across awaits.
#[cfg(feature = "hydrate")]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory persistence used by tests and as the SSR fallback, where no
/// browser storage exists and a logged-out view is the correct render.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Handle to the persisted session. Cheap to clone; all clones share one
/// backend.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn StorageBackend>,
}

impl SessionStore {
    #[must_use]
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Store backed by browser `localStorage` when hydrating, or by an
    /// empty in-memory map during server rendering.
    #[must_use]
    pub fn from_browser() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::new(Arc::new(LocalStorage))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::new(Arc::new(MemoryStorage::default()))
        }
    }

    /// Read the persisted session.
    ///
    /// Returns `None` when nothing is stored. Partial state (one key
    /// without the other) and unparseable user records also return `None`,
    /// after removing whatever was stored.
    #[must_use]
    pub fn load(&self) -> Option<Session> {
        let token = self.backend.get(TOKEN_KEY);
        let raw_user = self.backend.get(USER_KEY);
        match (token, raw_user) {
            (Some(token), Some(raw_user)) => match serde_json::from_str::<User>(&raw_user) {
                Ok(user) => Some(Session { token, user }),
                Err(_) => {
                    self.clear();
                    None
                }
            },
            (None, None) => None,
            _ => {
                self.clear();
                None
            }
        }
    }

    /// Persist a freshly issued session.
    ///
    /// The user record is written before the token so a concurrent `load`
    /// never sees a token paired with a missing profile.
    pub fn save(&self, session: &Session) {
        let Ok(raw_user) = serde_json::to_string(&session.user) else {
            return;
        };
        self.backend.set(USER_KEY, &raw_user);
        self.backend.set(TOKEN_KEY, &session.token);
    }

    /// Remove both persisted keys. Safe to call repeatedly.
    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }
}
