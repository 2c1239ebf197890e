use super::*;

fn game(name: &str) -> Game {
    Game { id: format!("id-{name}"), name: name.to_owned(), image_url: None }
}

fn catalog() -> Vec<Game> {
    ["Valorant", "FIFA 24", "Minecraft", "League of Legends", "Fortnite", "Apex Legends", "Rocket League"]
        .into_iter()
        .map(game)
        .collect()
}

fn member(id: &str) -> UserProfile {
    UserProfile { id: id.to_owned(), name: id.to_uppercase(), ..UserProfile::default() }
}

#[test]
fn filter_games_is_case_insensitive_substring() {
    let hits: Vec<String> = filter_games(&catalog(), "LEG").into_iter().map(|g| g.name).collect();
    assert_eq!(hits, vec!["League of Legends", "Apex Legends", "Rocket League"]);
}

#[test]
fn filter_games_with_empty_term_keeps_everything() {
    assert_eq!(filter_games(&catalog(), "").len(), 7);
}

#[test]
fn page_count_rounds_up() {
    assert_eq!(page_count(0), 0);
    assert_eq!(page_count(5), 1);
    assert_eq!(page_count(6), 2);
    assert_eq!(page_count(11), 3);
}

#[test]
fn page_slice_holds_at_most_five() {
    let all = catalog();
    let first = page_slice(&all, 1);
    assert_eq!(first.len(), PAGE_SIZE);
    assert_eq!(first[0].name, "Valorant");
    let second = page_slice(&all, 2);
    assert_eq!(second.len(), 2);
    assert_eq!(second[0].name, "Apex Legends");
}

#[test]
fn page_slice_out_of_range_is_empty() {
    assert!(page_slice(&catalog(), 3).is_empty());
    assert_eq!(page_slice(&catalog(), 0), page_slice(&catalog(), 1));
}

#[test]
fn other_members_excludes_viewer() {
    let list = other_members(vec![member("a"), member("me"), member("b")], Some("me"));
    let ids: Vec<&str> = list.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn other_members_without_viewer_keeps_all() {
    assert_eq!(other_members(vec![member("a"), member("b")], None).len(), 2);
}
