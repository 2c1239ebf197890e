use super::*;
use crate::util::storage::{KeyValueStore, MemoryStorage};

// =============================================================
// SessionUser wire format
// =============================================================

#[test]
fn session_user_accepts_underscore_id() {
    let user: SessionUser = serde_json::from_str(r#"{"_id":"abc","role":"admin","name":"Root"}"#).unwrap();
    assert_eq!(user.id, "abc");
    assert_eq!(user.role, Some(Role::Admin));
    assert_eq!(user.name.as_deref(), Some("Root"));
}

#[test]
fn session_user_empty_object_is_default() {
    let user: SessionUser = serde_json::from_str("{}").unwrap();
    assert_eq!(user, SessionUser::default());
}

#[test]
fn session_user_serializes_role_lowercase() {
    let user = SessionUser { id: "u1".to_owned(), role: Some(Role::User), ..SessionUser::default() };
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json, serde_json::json!({ "id": "u1", "role": "user" }));
}

#[test]
fn role_parse_and_as_str_agree() {
    for role in [Role::Admin, Role::User] {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
    assert_eq!(Role::parse("Admin"), None);
    assert_eq!(Role::parse(""), None);
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn default_state_is_unloaded_and_anonymous() {
    let state = SessionState::default();
    assert!(!state.loaded);
    assert!(!state.is_authenticated());
    assert_eq!(state.role(), None);
    assert_eq!(state.user_id(), None);
}

#[test]
fn role_is_hidden_without_token() {
    let state = SessionState {
        token: None,
        user: SessionUser { id: "a1".to_owned(), role: Some(Role::Admin), ..SessionUser::default() },
        loaded: true,
    };
    assert_eq!(state.role(), None);
    assert!(!state.is_admin());
    assert_eq!(state.user_id(), None);
}

#[test]
fn role_is_visible_with_token() {
    let state = SessionState {
        token: Some("t".to_owned()),
        user: SessionUser { id: "a1".to_owned(), role: Some(Role::Admin), ..SessionUser::default() },
        loaded: true,
    };
    assert!(state.is_admin());
    assert_eq!(state.user_id(), Some("a1"));
}

#[test]
fn from_store_marks_loaded() {
    let backend = MemoryStorage::new();
    backend.set("token", "t");
    let state = SessionState::from_store(&SessionStore::new(backend));
    assert!(state.loaded);
    assert_eq!(state.token.as_deref(), Some("t"));
    assert_eq!(state.user, SessionUser::default());
}

// =============================================================
// SessionContext
// =============================================================

#[test]
fn context_writes_through_to_store_and_signal() {
    let owner = Owner::new();
    owner.with(|| {
        let backend = MemoryStorage::new();
        let ctx = SessionContext::new(SessionStore::new(backend.clone()));
        assert!(!ctx.get_untracked().loaded);

        let user = SessionUser { id: "u1".to_owned(), role: Some(Role::User), ..SessionUser::default() };
        ctx.set_session("tok", &user);
        let state = ctx.get_untracked();
        assert!(state.loaded);
        assert_eq!(state.token.as_deref(), Some("tok"));
        assert_eq!(state.role(), Some(Role::User));
        assert_eq!(backend.get("token").as_deref(), Some("tok"));

        ctx.clear_session();
        let state = ctx.get_untracked();
        assert!(state.loaded);
        assert!(!state.is_authenticated());
        assert!(backend.is_empty());
    });
}

#[test]
fn context_load_picks_up_existing_storage() {
    let owner = Owner::new();
    owner.with(|| {
        let backend = MemoryStorage::new();
        backend.set("token", "persisted");
        backend.set("user", r#"{"id":"u2","role":"user"}"#);
        let ctx = SessionContext::new(SessionStore::new(backend));
        ctx.load();
        let state = ctx.get_untracked();
        assert_eq!(state.token.as_deref(), Some("persisted"));
        assert_eq!(state.user_id(), Some("u2"));
    });
}
