//! Game search with paging, and the active-member list for a picked game.

#[cfg(test)]
#[path = "looking_for_member_test.rs"]
mod looking_for_member_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::top_bar::TopBar;
use crate::net::api::ApiClient;
use crate::net::types::{Game, UserProfile};
use crate::state::session::SessionContext;
use crate::util::auth::chat_path;
use crate::util::format::avatar_or_default;
use crate::util::recent_games;

pub const PAGE_SIZE: usize = 5;
pub const LOAD_GAMES_FAILED: &str = "Failed to load games.";
pub const LOAD_MEMBERS_FAILED: &str = "Failed to load active users.";

/// Case-insensitive substring match on the game name.
pub fn filter_games(games: &[Game], term: &str) -> Vec<Game> {
    let needle = term.to_lowercase();
    games.iter().filter(|g| g.name.to_lowercase().contains(&needle)).cloned().collect()
}

pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

/// Items on 1-based `page`. Out-of-range pages are empty.
pub fn page_slice<T: Clone>(items: &[T], page: usize) -> Vec<T> {
    let start = page.saturating_sub(1) * PAGE_SIZE;
    items.iter().skip(start).take(PAGE_SIZE).cloned().collect()
}

/// Members other than the viewer.
pub fn other_members(members: Vec<UserProfile>, me: Option<&str>) -> Vec<UserProfile> {
    members.into_iter().filter(|m| Some(m.id.as_str()) != me).collect()
}

#[component]
pub fn LookingForMemberPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();

    let games = RwSignal::new(Vec::<Game>::new());
    let loading_games = RwSignal::new(true);
    let term = RwSignal::new(String::new());
    let page = RwSignal::new(1_usize);
    let error = RwSignal::new(String::new());

    let picked = RwSignal::new(None::<String>);
    let members = RwSignal::new(Vec::<UserProfile>::new());
    let loading_members = RwSignal::new(false);

    {
        let api = api.clone();
        Effect::new(move |_| {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.games().list().await {
                    Ok(list) => games.set(list),
                    Err(e) => {
                        log::warn!("looking-for-member: game list failed: {e}");
                        error.set(LOAD_GAMES_FAILED.to_owned());
                    }
                }
                loading_games.set(false);
            });
        });
    }

    let filtered = Memo::new(move |_| filter_games(&games.get(), &term.get()));
    let total_pages = Memo::new(move |_| page_count(filtered.get().len()));

    let show_members = Callback::new(move |name: String| {
        recent_games::record(session.store().backend(), &name);
        picked.set(Some(name.clone()));
        members.set(Vec::new());
        loading_members.set(true);
        error.set(String::new());
        let api = api.clone();
        let me = session.get_untracked().user_id().map(str::to_owned);
        leptos::task::spawn_local(async move {
            match api.users().get_active_members(&name).await {
                Ok(list) => members.set(other_members(list, me.as_deref())),
                Err(e) => {
                    log::warn!("looking-for-member: member search failed: {e}");
                    error.set(LOAD_MEMBERS_FAILED.to_owned());
                }
            }
            loading_members.set(false);
        });
    });

    let members_modal = move || {
        let navigate = navigate.clone();
        let body = if loading_members.get() {
            view! { <div class="spinner"></div> }.into_any()
        } else if !error.get().is_empty() {
            view! { <p class="text-danger">{error.get()}</p> }.into_any()
        } else if members.get().is_empty() {
            view! { <p>"No active users for this game."</p> }.into_any()
        } else {
            members
                .get()
                .into_iter()
                .map(|member| {
                    let navigate = navigate.clone();
                    let target = chat_path(&member.id);
                    view! {
                        <li class="member-row">
                            <img class="member-row__avatar" src=avatar_or_default(member.avatar.as_deref()) alt=member.name.clone()/>
                            <span>{format!("{} ({})", member.name, member.gamertag)}</span>
                            <button
                                class="member-btn"
                                on:click=move |_| {
                                    picked.set(None);
                                    navigate(&target, NavigateOptions::default());
                                }
                            >
                                "Chat"
                            </button>
                        </li>
                    }
                })
                .collect::<Vec<_>>()
                .into_any()
        };
        view! {
            <div class="dialog-backdrop" on:click=move |_| picked.set(None)>
                <div class="dialog" on:click=|ev| ev.stop_propagation()>
                    <h2>{move || format!("Active Members for {}", picked.get().unwrap_or_default())}</h2>
                    <ul class="member-list">{body}</ul>
                    <div class="dialog-actions">
                        <button class="btn" on:click=move |_| picked.set(None)>"Close"</button>
                    </div>
                </div>
            </div>
        }
    };

    view! {
        <div class="looking-wrapper">
            <TopBar/>
            <div class="looking-container">
                <input
                    class="search-box"
                    type="text"
                    placeholder="Search games..."
                    prop:value=move || term.get()
                    on:input=move |ev| {
                        term.set(event_target_value(&ev));
                        page.set(1);
                    }
                />
                <Show when=move || !loading_games.get() fallback=|| view! { <div class="spinner"></div> }>
                    <ul class="game-list">
                        {move || {
                            page_slice(&filtered.get(), page.get())
                                .into_iter()
                                .map(|game| {
                                    let name = game.name.clone();
                                    view! {
                                        <li class="game-row">
                                            <span class="game-title">{game.name}</span>
                                            <button class="member-btn" on:click=move |_| show_members.run(name.clone())>
                                                "Look for a member"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                    <div class="pagination-bar">
                        <button class="btn" disabled=move || page.get() <= 1 on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))>
                            "Back"
                        </button>
                        <span>{move || format!("Page {} of {}", page.get(), total_pages.get())}</span>
                        <button
                            class="member-btn"
                            disabled=move || page.get() >= total_pages.get()
                            on:click=move |_| page.update(|p| *p = (*p + 1).min(total_pages.get_untracked().max(1)))
                        >
                            "Next"
                        </button>
                    </div>
                </Show>
                <Show when=move || picked.get().is_some()>
                    {members_modal.clone()}
                </Show>
            </div>
        </div>
    }
}
