use super::*;
use crate::net::types::Participant;

fn message(sender: &str) -> ChatMessage {
    ChatMessage {
        sender: Participant { id: sender.to_owned(), ..Participant::default() },
        text: "gg".to_owned(),
        timestamp: "2024-05-01T18:42:07Z".to_owned(),
    }
}

#[test]
fn is_mine_compares_sender_with_viewer() {
    assert!(is_mine(&message("me"), Some("me")));
    assert!(!is_mine(&message("other"), Some("me")));
}

#[test]
fn is_mine_is_false_without_viewer() {
    assert!(!is_mine(&message("me"), None));
}

#[test]
fn outgoing_text_ignores_blank_input() {
    assert_eq!(outgoing_text(""), None);
    assert_eq!(outgoing_text("   \t"), None);
}

#[test]
fn outgoing_text_keeps_surrounding_whitespace() {
    assert_eq!(outgoing_text(" hi "), Some(" hi "));
}
