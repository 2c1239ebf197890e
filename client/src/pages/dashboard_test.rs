use super::*;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn toggle_game_adds_missing_name_at_end() {
    assert_eq!(toggle_game(&names(&["FIFA"]), "Valorant"), names(&["FIFA", "Valorant"]));
}

#[test]
fn toggle_game_removes_present_name() {
    assert_eq!(toggle_game(&names(&["FIFA", "Valorant", "Minecraft"]), "Valorant"), names(&["FIFA", "Minecraft"]));
}

#[test]
fn toggle_game_twice_restores_selection() {
    let start = names(&["FIFA"]);
    let once = toggle_game(&start, "Minecraft");
    assert_eq!(toggle_game(&once, "Minecraft"), start);
}

#[test]
fn activity_for_empty_selection_is_inactive() {
    assert_eq!(activity_for(Vec::new()), ActivityChange::Inactive);
}

#[test]
fn activity_for_non_empty_selection_sends_full_list() {
    assert_eq!(activity_for(names(&["FIFA", "Valorant"])), ActivityChange::Active(names(&["FIFA", "Valorant"])));
}

#[test]
fn removing_last_game_goes_inactive() {
    let next = toggle_game(&names(&["FIFA"]), "FIFA");
    assert_eq!(activity_for(next), ActivityChange::Inactive);
}

#[test]
fn news_items_link_out() {
    assert!(NEWS.iter().all(|n| n.link.starts_with("https://")));
}
