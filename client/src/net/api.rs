//! REST client for the backend API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `ApiClient` is built at the app root and provided as context. Before
//! each request it reads the token from the session store and, when present,
//! sends it as a bearer credential. Login and register go out anonymous. Calls map one-to-one onto backend
//! endpoints: no retry, no caching, no batching, no timeout.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back to the calling view unchanged as [`ApiError`]. The one
//! cross-cutting rule: a 401 on a request that carried a token clears the
//! session, and the reactive authentication gate then sends the user to
//! `/auth`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    ActiveGames, AuthResponse, ChatSummary, ChatThread, Credentials, ErrorBody, Game, GameDraft, NewMessage,
    ProfileUpdate, Registration, UserProfile,
};
use crate::state::session::SessionContext;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const CONTENT_TYPE: &str = "application/json";
pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const REGISTER_ENDPOINT: &str = "/auth/register";

/// Backend location, fixed for the lifetime of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    /// Base URL from the `API_URL` variable at build time, or the local default.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unauthorized")]
    Unauthorized { message: Option<String> },
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("invalid JSON body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message supplied by the backend in its error body, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message } | Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Backend message, or `fallback` when the backend gave none.
    pub fn message_or(&self, fallback: &str) -> String {
        self.message().unwrap_or(fallback).to_owned()
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// `Authorization` header value for `token`, if any.
pub fn bearer_header(token: Option<&str>) -> Option<String> {
    token.filter(|t| !t.is_empty()).map(|t| format!("Bearer {t}"))
}

/// Whether a request to `path` is sent with the session token.
pub fn is_authenticated_endpoint(path: &str) -> bool {
    path != LOGIN_ENDPOINT && path != REGISTER_ENDPOINT
}

/// `Authorization` value for a request to `path` given the stored token.
/// Also decides the unauthorized policy: only a request that sent a header
/// can end the session.
pub fn request_authorization(path: &str, token: Option<&str>) -> Option<String> {
    if is_authenticated_endpoint(path) { bearer_header(token) } else { None }
}

/// Map a response status onto success or an [`ApiError`], pulling the
/// backend's `message` out of the body when it has one.
pub fn check_status(status: u16, body: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let message = serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.message);
    if status == 401 {
        Err(ApiError::Unauthorized { message })
    } else {
        Err(ApiError::Status { status, message })
    }
}

/// Whether a failed request should end the local session.
pub fn should_clear_session(error: &ApiError, sent_token: bool) -> bool {
    sent_token && error.is_unauthorized()
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<T: Serialize>(body: &T) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn game_endpoint(id: &str) -> String {
    format!("/games/{id}")
}

fn user_endpoint(id: &str) -> String {
    format!("/users/{id}")
}

/// Chat thread with a user, and also the chat delete path (keyed by chat id).
fn my_chat_endpoint(key: &str) -> String {
    format!("/users/me/chats/{key}")
}

/// HTTP client bound to the session it authenticates with.
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: ApiConfig,
    session: SessionContext,
}

impl ApiClient {
    pub fn new(config: ApiConfig, session: SessionContext) -> Self {
        Self { config, session }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi(self)
    }

    pub fn games(&self) -> GamesApi<'_> {
        GamesApi(self)
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi(self)
    }

    pub fn chat(&self) -> ChatApi<'_> {
        ChatApi(self)
    }

    /// `Authorization` value for a request to `path`, read from the store now.
    pub fn authorization(&self, path: &str) -> Option<String> {
        request_authorization(path, self.session.store().get_token().as_deref())
    }

    /// Apply the unauthorized policy to a failed request and hand the error back.
    pub fn handle_failure(&self, error: ApiError, sent_token: bool) -> ApiError {
        if should_clear_session(&error, sent_token) {
            log::warn!("backend rejected the session token; signing out");
            self.session.clear_session();
        }
        error
    }

    /// Send one request and return the raw response body.
    async fn send(&self, method: Method, path: &str, query: &[(&str, &str)], body: Option<String>) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::{Method as HttpMethod, RequestBuilder};

            let authorization = self.authorization(path);
            let http_method = match method {
                Method::Get => HttpMethod::GET,
                Method::Post => HttpMethod::POST,
                Method::Put => HttpMethod::PUT,
                Method::Delete => HttpMethod::DELETE,
            };
            let mut builder = RequestBuilder::new(&self.config.url(path))
                .method(http_method)
                .header("Content-Type", CONTENT_TYPE);
            if !query.is_empty() {
                builder = builder.query(query.iter().copied());
            }
            if let Some(value) = &authorization {
                builder = builder.header("Authorization", value);
            }
            let request = match body {
                Some(json) => builder.body(json),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let resp = request.send().await.map_err(|e| {
                log::warn!("{method:?} {path}: {e}");
                ApiError::Network(e.to_string())
            })?;
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            if let Err(error) = check_status(status, &text) {
                log::warn!("{method:?} {path}: {error}");
                return Err(self.handle_failure(error, authorization.is_some()));
            }
            Ok(text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, path, query, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, method: Method, path: &str, query: &[(&str, &str)]) -> Result<T, ApiError> {
        let body = self.send(method, path, query, None).await?;
        decode(&body)
    }

    async fn submit<B: Serialize, T: DeserializeOwned>(&self, method: Method, path: &str, payload: &B) -> Result<T, ApiError> {
        let body = self.send(method, path, &[], Some(encode(payload)?)).await?;
        decode(&body)
    }

    async fn execute(&self, method: Method, path: &str, payload: Option<String>) -> Result<(), ApiError> {
        self.send(method, path, &[], payload).await.map(|_| ())
    }
}

/// `/auth/*` calls plus local sign-out.
pub struct AuthApi<'a>(&'a ApiClient);

impl AuthApi<'_> {
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.0.submit(Method::Post, LOGIN_ENDPOINT, credentials).await
    }

    pub async fn register(&self, registration: &Registration) -> Result<AuthResponse, ApiError> {
        self.0.submit(Method::Post, REGISTER_ENDPOINT, registration).await
    }

    /// Local only: forgets the session without contacting the backend.
    pub fn logout(&self) {
        self.0.session.clear_session();
    }
}

/// `/games` catalog calls.
pub struct GamesApi<'a>(&'a ApiClient);

impl GamesApi<'_> {
    pub async fn list(&self) -> Result<Vec<Game>, ApiError> {
        self.0.fetch(Method::Get, "/games", &[]).await
    }

    pub async fn get(&self, id: &str) -> Result<Game, ApiError> {
        self.0.fetch(Method::Get, &game_endpoint(id), &[]).await
    }

    pub async fn create(&self, draft: &GameDraft) -> Result<(), ApiError> {
        self.0.execute(Method::Post, "/games", Some(encode(draft)?)).await
    }

    pub async fn update(&self, id: &str, draft: &GameDraft) -> Result<(), ApiError> {
        self.0.execute(Method::Put, &game_endpoint(id), Some(encode(draft)?)).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.0.execute(Method::Delete, &game_endpoint(id), None).await
    }
}

/// `/users` profile and matchmaking calls.
pub struct UsersApi<'a>(&'a ApiClient);

impl UsersApi<'_> {
    pub async fn get_profile(&self) -> Result<UserProfile, ApiError> {
        self.0.fetch(Method::Get, "/users/me", &[]).await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ApiError> {
        self.0.execute(Method::Put, "/users/me", Some(encode(update)?)).await
    }

    /// Mark the user active in exactly `games`.
    pub async fn set_active(&self, games: &[String]) -> Result<(), ApiError> {
        self.0.execute(Method::Post, "/users/me/active", Some(encode(&ActiveGames { game: games })?)).await
    }

    pub async fn set_inactive(&self) -> Result<(), ApiError> {
        self.0.execute(Method::Post, "/users/me/inactive", None).await
    }

    /// Users currently active in `game`.
    pub async fn get_active_members(&self, game: &str) -> Result<Vec<UserProfile>, ApiError> {
        self.0.fetch(Method::Get, "/users/members", &[("game", game)]).await
    }

    pub async fn list(&self) -> Result<Vec<UserProfile>, ApiError> {
        self.0.fetch(Method::Get, "/users", &[]).await
    }

    pub async fn get(&self, id: &str) -> Result<UserProfile, ApiError> {
        self.0.fetch(Method::Get, &user_endpoint(id), &[]).await
    }
}

/// `/users/me/chats` messaging calls.
pub struct ChatApi<'a>(&'a ApiClient);

impl ChatApi<'_> {
    pub async fn list(&self) -> Result<Vec<ChatSummary>, ApiError> {
        self.0.fetch(Method::Get, "/users/me/chats", &[]).await
    }

    /// Thread with `user_id`; the backend creates it on first access.
    pub async fn with_user(&self, user_id: &str) -> Result<ChatThread, ApiError> {
        self.0.fetch(Method::Get, &my_chat_endpoint(user_id), &[]).await
    }

    /// Send `text` to `user_id` and return the updated thread.
    pub async fn send_message(&self, user_id: &str, text: &str) -> Result<ChatThread, ApiError> {
        self.0.submit(Method::Post, &my_chat_endpoint(user_id), &NewMessage { text }).await
    }

    pub async fn delete(&self, chat_id: &str) -> Result<(), ApiError> {
        self.0.execute(Method::Delete, &my_chat_endpoint(chat_id), None).await
    }
}
