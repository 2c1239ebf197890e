//! Session identity for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionContext` is provided once at the app root and is the only path
//! components use to read or change who is signed in. It pairs the persisted
//! [`SessionStore`] with a reactive snapshot so guards re-evaluate as soon as
//! the session changes (sign-in, sign-out, rejected token).
//!
//! Role data comes from client-writable storage. Gating on it is a UI
//! convenience; the backend re-checks authorization on every call.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};

use crate::util::session::SessionStore;

/// Account role issued by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "admin" => Some(Self::Admin),
            "user" => Some(Self::User),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

/// Unknown role strings read as "no role" instead of failing the record.
fn lenient_role<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Role::parse))
}

/// Locally cached copy of the authenticated user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_role", skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gamertag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Snapshot of the persisted session.
///
/// `loaded` stays `false` until storage has been read in the browser; guards
/// hold off on any decision before that.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: SessionUser,
    pub loaded: bool,
}

impl SessionState {
    pub fn from_store(store: &SessionStore) -> Self {
        Self { token: store.get_token(), user: store.get_user(), loaded: true }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Role of the signed-in user. Without a token there is no identity,
    /// whatever the cached record says.
    pub fn role(&self) -> Option<Role> {
        self.token.as_ref()?;
        self.user.role
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    /// Id of the signed-in user, if both a token and an id are cached.
    pub fn user_id(&self) -> Option<&str> {
        self.token.as_ref()?;
        Some(self.user.id.as_str()).filter(|id| !id.is_empty())
    }
}

/// Injected session handle: persisted store plus reactive snapshot.
#[derive(Clone, Debug)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
    store: SessionStore,
}

impl SessionContext {
    pub fn new(store: SessionStore) -> Self {
        Self { state: RwSignal::new(SessionState::default()), store }
    }

    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Tracked read of the current snapshot.
    pub fn get(&self) -> SessionState {
        self.state.get()
    }

    /// Untracked read, for event handlers and request hooks.
    pub fn get_untracked(&self) -> SessionState {
        self.state.get_untracked()
    }

    /// Refresh the snapshot from storage.
    pub fn load(&self) {
        self.state.set(SessionState::from_store(&self.store));
    }

    pub fn set_session(&self, token: &str, user: &SessionUser) {
        self.store.set_session(token, user);
        self.load();
    }

    pub fn clear_session(&self) {
        self.store.clear_session();
        self.load();
    }
}
