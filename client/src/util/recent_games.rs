//! Most-recently-viewed game names, kept client-side only.
//!
//! The looking-for-member page records a game each time its member list is
//! opened; the dashboard shows the games that are still in the catalog.

#[cfg(test)]
#[path = "recent_games_test.rs"]
mod recent_games_test;

use crate::net::types::Game;
use crate::util::storage::{KeyValueStore, load_json, save_json};

pub const RECENT_GAMES_KEY: &str = "recentGames";
pub const RECENT_GAMES_LIMIT: usize = 5;

/// Move `name` to the front, dropping duplicates and anything past the limit.
pub fn push_recent(list: &[String], name: &str) -> Vec<String> {
    std::iter::once(name.to_owned())
        .chain(list.iter().filter(|g| g.as_str() != name).cloned())
        .take(RECENT_GAMES_LIMIT)
        .collect()
}

pub fn load(store: &dyn KeyValueStore) -> Vec<String> {
    load_json(store, RECENT_GAMES_KEY).unwrap_or_default()
}

/// Record a visit to `name` and return the updated list.
pub fn record(store: &dyn KeyValueStore, name: &str) -> Vec<String> {
    let next = push_recent(&load(store), name);
    save_json(store, RECENT_GAMES_KEY, &next);
    next
}

/// Catalog entries whose names appear in the recent list, in catalog order.
pub fn matching_games(catalog: &[Game], recent: &[String]) -> Vec<Game> {
    catalog.iter().filter(|g| recent.contains(&g.name)).cloned().collect()
}
