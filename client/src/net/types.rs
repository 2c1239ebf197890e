//! Wire DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! The backend speaks camelCase JSON and names ids `_id` on most documents
//! but `id` on the auth response user; every id field accepts both. Optional
//! and list fields default so partial documents still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::session::SessionUser;

/// A catalog game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Create/update payload for a catalog game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDraft {
    pub name: String,
    pub image_url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Sign-up payload. The confirmation field never leaves the form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub gamertag: String,
    pub description: String,
    pub favorite_games: Vec<String>,
    pub platforms: Vec<String>,
}

/// Body of a successful login or registration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub user: SessionUser,
}

/// Full user profile as returned by `/users/me`, `/users/:id` and the
/// active-member search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub description: String,
    pub gamertag: String,
    pub discord: String,
    pub platforms: Vec<String>,
    pub favorite_games: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub is_active: bool,
    pub active_games: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_game: Option<String>,
}

impl UserProfile {
    /// Games the user is active in. Older records carry a single
    /// `activeGame` instead of the list.
    pub fn current_games(&self) -> Vec<String> {
        if !self.active_games.is_empty() {
            return self.active_games.clone();
        }
        self.active_game.iter().cloned().collect()
    }
}

/// Editable subset of a profile sent to `PUT /users/me`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    pub description: String,
    pub gamertag: String,
    pub discord: String,
    pub platforms: Vec<String>,
    pub favorite_games: Vec<String>,
    pub avatar: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActiveGames<'a> {
    pub game: &'a [String],
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewMessage<'a> {
    pub text: &'a str,
}

/// A chat participant (or message sender).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Participant {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatMessage {
    pub sender: Participant,
    pub text: String,
    pub timestamp: String,
}

/// One conversation in `GET /users/me/chats`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSummary {
    #[serde(alias = "_id")]
    pub id: String,
    pub participants: Vec<Participant>,
    pub messages: Vec<ChatMessage>,
}

impl ChatSummary {
    /// The participant who is not `me`.
    pub fn other_participant(&self, me: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id != me)
    }

    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

/// Body of `GET`/`POST /users/me/chats/:userId`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatThread {
    #[serde(alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub messages: Vec<ChatMessage>,
}

/// Error body most backend failures carry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
