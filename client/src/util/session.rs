//! Persisted session cache: bearer token, user record, logged-in flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend's last successful auth response is mirrored here and read back
//! by route guards, the drawer, and the API client's request hook. Nothing in
//! this module talks to the network.
//!
//! ERROR HANDLING
//! ==============
//! Reads never fail. A missing or malformed `user` entry reads as an empty
//! record, which every guard treats as "no identity".

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use crate::state::session::SessionUser;
use crate::util::storage::{BrowserStorage, KeyValueStore, load_json, save_json};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const LOGGED_IN_KEY: &str = "isLoggedIn";

/// Typed access to the session keys of a [`KeyValueStore`].
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self { backend: Arc::new(backend) }
    }

    /// Store backed by `window.localStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }

    /// Underlying key/value store, shared with other client-side caches.
    pub fn backend(&self) -> &dyn KeyValueStore {
        self.backend.as_ref()
    }

    /// Current bearer token. An empty string counts as absent.
    pub fn get_token(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Cached user record, or an empty record when missing or unparseable.
    pub fn get_user(&self) -> SessionUser {
        load_json(self.backend(), USER_KEY).unwrap_or_default()
    }

    /// Flag consulted only by the splash screen's delayed redirect.
    pub fn is_logged_in(&self) -> bool {
        self.backend.get(LOGGED_IN_KEY).as_deref() == Some("true")
    }

    /// Overwrite token and user with a fresh auth response.
    pub fn set_session(&self, token: &str, user: &SessionUser) {
        self.backend.set(TOKEN_KEY, token);
        save_json(self.backend(), USER_KEY, user);
        self.backend.set(LOGGED_IN_KEY, "true");
        log::debug!("session stored for user {:?}", user.id);
    }

    /// Remove every session key. Safe to call repeatedly.
    pub fn clear_session(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
        self.backend.remove(LOGGED_IN_KEY);
        log::debug!("session cleared");
    }
}
