use super::*;
use crate::state::session::Role;

#[test]
fn game_decodes_underscore_id_and_image_url() {
    let game: Game = serde_json::from_str(r#"{"_id":"g1","name":"FIFA","imageUrl":"data:x"}"#).unwrap();
    assert_eq!(game.id, "g1");
    assert_eq!(game.name, "FIFA");
    assert_eq!(game.image_url.as_deref(), Some("data:x"));
}

#[test]
fn game_draft_serializes_camel_case() {
    let draft = GameDraft { name: "Valorant".to_owned(), image_url: String::new() };
    assert_eq!(serde_json::to_value(&draft).unwrap(), serde_json::json!({ "name": "Valorant", "imageUrl": "" }));
}

#[test]
fn registration_omits_confirmation_and_uses_camel_case() {
    let reg = Registration {
        name: "Sam".to_owned(),
        email: "sam@example.com".to_owned(),
        password: "pw".to_owned(),
        gamertag: "sammy".to_owned(),
        ..Registration::default()
    };
    let json = serde_json::to_value(&reg).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "Sam",
            "email": "sam@example.com",
            "password": "pw",
            "gamertag": "sammy",
            "description": "",
            "favoriteGames": [],
            "platforms": []
        })
    );
}

#[test]
fn auth_response_decodes_user_role() {
    let resp: AuthResponse =
        serde_json::from_str(r#"{"token":"t","user":{"id":"u1","role":"admin","name":"Ada"}}"#).unwrap();
    assert_eq!(resp.token, "t");
    assert_eq!(resp.user.role, Some(Role::Admin));
}

#[test]
fn user_profile_tolerates_sparse_documents() {
    let profile: UserProfile = serde_json::from_str(r#"{"_id":"u1","name":"Ada"}"#).unwrap();
    assert_eq!(profile.id, "u1");
    assert!(profile.platforms.is_empty());
    assert!(!profile.is_active);
}

#[test]
fn current_games_falls_back_to_single_active_game() {
    let legacy: UserProfile = serde_json::from_str(r#"{"activeGame":"FIFA","isActive":true}"#).unwrap();
    assert_eq!(legacy.current_games(), vec!["FIFA".to_owned()]);

    let current: UserProfile =
        serde_json::from_str(r#"{"activeGames":["Valorant","FIFA"],"activeGame":"Old"}"#).unwrap();
    assert_eq!(current.current_games(), vec!["Valorant".to_owned(), "FIFA".to_owned()]);

    assert!(UserProfile::default().current_games().is_empty());
}

#[test]
fn active_games_body_uses_game_key() {
    let games = vec!["FIFA".to_owned()];
    let body = ActiveGames { game: &games };
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({ "game": ["FIFA"] }));
}

#[test]
fn chat_summary_finds_other_participant_and_last_message() {
    let chat: ChatSummary = serde_json::from_value(serde_json::json!({
        "_id": "c1",
        "participants": [{ "_id": "me", "name": "Me" }, { "_id": "them", "name": "Them" }],
        "messages": [
            { "sender": { "_id": "me" }, "text": "hi", "timestamp": "2024-01-01T10:00:00Z" },
            { "sender": { "_id": "them" }, "text": "yo", "timestamp": "2024-01-01T10:01:00Z" }
        ]
    }))
    .unwrap();

    assert_eq!(chat.other_participant("me").map(|p| p.name.as_str()), Some("Them"));
    assert_eq!(chat.last_message().map(|m| m.text.as_str()), Some("yo"));
}

#[test]
fn chat_summary_without_messages_has_no_last_message() {
    let chat = ChatSummary::default();
    assert!(chat.last_message().is_none());
    assert!(chat.other_participant("me").is_none());
}

#[test]
fn error_body_reads_optional_message() {
    let body: ErrorBody = serde_json::from_str(r#"{"message":"Invalid credentials"}"#).unwrap();
    assert_eq!(body.message.as_deref(), Some("Invalid credentials"));
    let empty: ErrorBody = serde_json::from_str("{}").unwrap();
    assert!(empty.message.is_none());
}
