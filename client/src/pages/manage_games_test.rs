use super::*;

#[test]
fn game_draft_rejects_blank_name() {
    assert_eq!(game_draft("", "https://img"), None);
    assert_eq!(game_draft("   ", ""), None);
}

#[test]
fn game_draft_keeps_name_and_trims_image_url() {
    assert_eq!(
        game_draft("Valorant", "  https://img/v.png "),
        Some(GameDraft { name: "Valorant".to_owned(), image_url: "https://img/v.png".to_owned() })
    );
}

#[test]
fn game_draft_allows_missing_image() {
    assert_eq!(game_draft("FIFA", "").map(|d| d.image_url), Some(String::new()));
}
