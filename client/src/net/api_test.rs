use super::*;
use crate::state::session::{Role, SessionUser};
use crate::util::session::SessionStore;
use crate::util::storage::{KeyValueStore, MemoryStorage};
use leptos::prelude::Owner;

// =============================================================
// Configuration and paths
// =============================================================

#[test]
fn api_config_trims_trailing_slash() {
    let cfg = ApiConfig::new("https://api.example.test/api/");
    assert_eq!(cfg.base_url, "https://api.example.test/api");
    assert_eq!(cfg.url("/games"), "https://api.example.test/api/games");
}

#[test]
fn api_config_default_points_at_local_backend() {
    assert_eq!(ApiConfig::default().url("/auth/login"), "http://localhost:5000/api/auth/login");
}

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(game_endpoint("g1"), "/games/g1");
    assert_eq!(user_endpoint("u1"), "/users/u1");
    assert_eq!(my_chat_endpoint("u2"), "/users/me/chats/u2");
}

// =============================================================
// Request hook
// =============================================================

#[test]
fn bearer_header_present_only_with_token() {
    assert_eq!(bearer_header(Some("abc")).as_deref(), Some("Bearer abc"));
    assert_eq!(bearer_header(None), None);
    assert_eq!(bearer_header(Some("")), None);
}

#[test]
fn auth_endpoints_never_carry_the_token() {
    assert!(!is_authenticated_endpoint(LOGIN_ENDPOINT));
    assert!(!is_authenticated_endpoint(REGISTER_ENDPOINT));
    assert!(is_authenticated_endpoint("/users/me"));
    assert_eq!(request_authorization(LOGIN_ENDPOINT, Some("tok")), None);
    assert_eq!(request_authorization(REGISTER_ENDPOINT, Some("tok")), None);
    assert_eq!(request_authorization("/games", Some("tok")).as_deref(), Some("Bearer tok"));
}

#[test]
fn authorization_follows_the_stored_token() {
    let owner = Owner::new();
    owner.with(|| {
        let backend = MemoryStorage::new();
        let session = SessionContext::new(SessionStore::new(backend.clone()));
        let client = ApiClient::new(ApiConfig::default(), session.clone());
        assert_eq!(client.authorization("/users/me"), None);

        let user = SessionUser { id: "u1".to_owned(), role: Some(Role::User), ..SessionUser::default() };
        session.set_session("first", &user);
        assert_eq!(client.authorization("/users/me").as_deref(), Some("Bearer first"));

        session.set_session("second", &user);
        assert_eq!(client.authorization("/users/me/chats").as_deref(), Some("Bearer second"));

        session.clear_session();
        assert_eq!(client.authorization("/users/me"), None);
    });
}

// =============================================================
// Status classification
// =============================================================

#[test]
fn check_status_accepts_2xx() {
    assert_eq!(check_status(200, ""), Ok(()));
    assert_eq!(check_status(201, "{}"), Ok(()));
    assert_eq!(check_status(204, ""), Ok(()));
}

#[test]
fn check_status_401_is_unauthorized_with_message() {
    let err = check_status(401, r#"{"message":"Invalid credentials"}"#).unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.message(), Some("Invalid credentials"));
}

#[test]
fn check_status_other_failures_keep_status() {
    let err = check_status(500, "<html>boom</html>").unwrap_err();
    assert_eq!(err, ApiError::Status { status: 500, message: None });
    assert_eq!(err.to_string(), "request failed with status 500");

    let forbidden = check_status(403, r#"{"message":"Admins only"}"#).unwrap_err();
    assert!(!forbidden.is_unauthorized());
    assert_eq!(forbidden.message(), Some("Admins only"));
}

#[test]
fn message_or_prefers_backend_message() {
    let err = ApiError::Status { status: 400, message: Some("Email already used".to_owned()) };
    assert_eq!(err.message_or("Registration failed. Please try again."), "Email already used");
    let net = ApiError::Network("offline".to_owned());
    assert_eq!(net.message_or("Login failed. Please try again."), "Login failed. Please try again.");
}

#[test]
fn decode_reports_malformed_json() {
    let err = decode::<Vec<Game>>("not json").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

// =============================================================
// Unauthorized policy
// =============================================================

#[test]
fn should_clear_session_only_for_authenticated_401() {
    let unauthorized = ApiError::Unauthorized { message: None };
    assert!(should_clear_session(&unauthorized, true));
    assert!(!should_clear_session(&unauthorized, false));
    assert!(!should_clear_session(&ApiError::Status { status: 403, message: None }, true));
    assert!(!should_clear_session(&ApiError::Network("x".to_owned()), true));
}

fn signed_in_client(backend: &MemoryStorage) -> ApiClient {
    let session = SessionContext::new(SessionStore::new(backend.clone()));
    let user = SessionUser { id: "u1".to_owned(), role: Some(Role::User), ..SessionUser::default() };
    session.set_session("tok", &user);
    ApiClient::new(ApiConfig::default(), session)
}

#[test]
fn handle_failure_clears_session_on_rejected_token() {
    let owner = Owner::new();
    owner.with(|| {
        let backend = MemoryStorage::new();
        let client = signed_in_client(&backend);

        let err = client.handle_failure(ApiError::Unauthorized { message: None }, true);
        assert!(err.is_unauthorized());
        assert!(backend.get("token").is_none());
        assert!(backend.get("user").is_none());
        assert!(!client.session.get_untracked().is_authenticated());
    });
}

#[test]
fn handle_failure_keeps_session_on_other_errors() {
    let owner = Owner::new();
    owner.with(|| {
        let backend = MemoryStorage::new();
        let client = signed_in_client(&backend);

        client.handle_failure(ApiError::Status { status: 500, message: None }, true);
        client.handle_failure(ApiError::Unauthorized { message: None }, false);
        assert_eq!(backend.get("token").as_deref(), Some("tok"));
    });
}

#[test]
fn rejected_login_keeps_existing_session() {
    let owner = Owner::new();
    owner.with(|| {
        let backend = MemoryStorage::new();
        let client = signed_in_client(&backend);

        let sent_token = client.authorization(LOGIN_ENDPOINT).is_some();
        assert!(!sent_token);
        client.handle_failure(ApiError::Unauthorized { message: Some("Invalid credentials".to_owned()) }, sent_token);
        assert_eq!(backend.get("token").as_deref(), Some("tok"));
        assert!(backend.get("user").is_some());
        assert_eq!(backend.get("isLoggedIn").as_deref(), Some("true"));
        assert!(client.session.get_untracked().is_authenticated());
    });
}

#[test]
fn logout_is_local_and_idempotent() {
    let owner = Owner::new();
    owner.with(|| {
        let backend = MemoryStorage::new();
        let client = signed_in_client(&backend);
        client.auth().logout();
        client.auth().logout();
        assert!(backend.is_empty());
        assert!(client.session.get_untracked().loaded);
    });
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_browser() {
    let owner = Owner::new();
    owner.with(|| {
        let backend = MemoryStorage::new();
        let client = signed_in_client(&backend);
        let result = futures::executor::block_on(client.games().list());
        assert_eq!(result, Err(ApiError::Unavailable));
        assert_eq!(backend.get("token").as_deref(), Some("tok"));
    });
}
