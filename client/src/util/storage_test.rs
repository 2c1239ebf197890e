use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let store = MemoryStorage::new();
    assert!(store.get("token").is_none());

    store.set("token", "abc");
    assert_eq!(store.get("token").as_deref(), Some("abc"));

    store.set("token", "def");
    assert_eq!(store.get("token").as_deref(), Some("def"));
    assert_eq!(store.len(), 1);

    store.remove("token");
    assert!(store.get("token").is_none());
    assert!(store.is_empty());
}

#[test]
fn memory_storage_clones_share_entries() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.set("k", "v");
    assert_eq!(b.get("k").as_deref(), Some("v"));
}

#[test]
fn load_json_reads_valid_values() {
    let store = MemoryStorage::new();
    store.set("recentGames", r#"["Valorant","FIFA"]"#);
    let games: Option<Vec<String>> = load_json(&store, "recentGames");
    assert_eq!(games, Some(vec!["Valorant".to_owned(), "FIFA".to_owned()]));
}

#[test]
fn load_json_treats_malformed_as_missing() {
    let store = MemoryStorage::new();
    store.set("recentGames", "{not json");
    let games: Option<Vec<String>> = load_json(&store, "recentGames");
    assert!(games.is_none());
}

#[test]
fn save_json_then_load_json() {
    let store = MemoryStorage::new();
    save_json(&store, "list", &vec![1, 2, 3]);
    assert_eq!(store.get("list").as_deref(), Some("[1,2,3]"));
    assert_eq!(load_json::<Vec<i32>>(&store, "list"), Some(vec![1, 2, 3]));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_noop_outside_browser() {
    let store = BrowserStorage;
    store.set("token", "abc");
    assert!(store.get("token").is_none());
    store.remove("token");
}
