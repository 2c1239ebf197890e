//! Member dashboard: news, recent games, and the active-games grid.
//!
//! DESIGN
//! ======
//! The grid is the single editor of the member's active games. Every click
//! sends the whole new selection; an empty selection flips the member to
//! inactive instead of posting an empty list.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::top_bar::TopBar;
use crate::net::api::ApiClient;
use crate::net::types::Game;
use crate::state::session::SessionContext;
use crate::util::auth::LOOKING_FOR_MEMBER_PATH;
use crate::util::recent_games;

pub const LOAD_GAMES_FAILED: &str = "Failed to load games.";
pub const ACTIVE_STATUS_FAILED: &str = "Failed to update active status.";
pub const ACTIVE_GAMES_FAILED: &str = "Failed to update active games.";

pub struct NewsItem {
    pub title: &'static str,
    pub image: &'static str,
    pub link: &'static str,
}

pub const NEWS: &[NewsItem] = &[
    NewsItem {
        title: "Riot cancels podcast episode amid LCS walkout",
        image: "/Riot.avif",
        link: "https://www.dexerto.com/league-of-legends/riot-cancels-podcast-episode-with-executive-amid-lcs-walkout-talks-2164548/",
    },
    NewsItem {
        title: "Resident Evil Requiem: Everything we know",
        image: "/R9.webp",
        link: "https://www.gamesradar.com/resident-evil-9-requiem/",
    },
];

/// What to tell the backend after the selection changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActivityChange {
    Active(Vec<String>),
    Inactive,
}

/// Add `name` if absent, remove it if present. Order of the rest is kept.
pub fn toggle_game(selected: &[String], name: &str) -> Vec<String> {
    if selected.iter().any(|g| g == name) {
        selected.iter().filter(|g| g.as_str() != name).cloned().collect()
    } else {
        selected.iter().cloned().chain(std::iter::once(name.to_owned())).collect()
    }
}

pub fn activity_for(selection: Vec<String>) -> ActivityChange {
    if selection.is_empty() { ActivityChange::Inactive } else { ActivityChange::Active(selection) }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();

    let games = RwSignal::new(Vec::<Game>::new());
    let selected = RwSignal::new(Vec::<String>::new());
    let is_active = RwSignal::new(true);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let recent = RwSignal::new(Vec::<String>::new());

    {
        let api = api.clone();
        Effect::new(move |_| {
            recent.set(recent_games::load(session.store().backend()));
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.games().list().await {
                    Ok(list) => games.set(list),
                    Err(e) => {
                        log::warn!("dashboard: game list failed: {e}");
                        error.set(LOAD_GAMES_FAILED.to_owned());
                    }
                }
                if let Ok(profile) = api.users().get_profile().await {
                    is_active.set(profile.is_active);
                    selected.set(profile.current_games());
                }
            });
        });
    }

    let apply = {
        let api = api.clone();
        move |change: ActivityChange, failure: &'static str| {
            busy.set(true);
            error.set(String::new());
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = match &change {
                    ActivityChange::Inactive => api.users().set_inactive().await,
                    ActivityChange::Active(list) => api.users().set_active(list).await,
                };
                match result {
                    Ok(()) => is_active.set(matches!(change, ActivityChange::Active(_))),
                    Err(e) => {
                        log::warn!("dashboard: activity update failed: {e}");
                        error.set(failure.to_owned());
                    }
                }
                busy.set(false);
            });
        }
    };

    let on_toggle_active = {
        let apply = apply.clone();
        move |_: leptos::ev::Event| {
            error.set(String::new());
            if is_active.get_untracked() {
                selected.set(Vec::new());
                apply(ActivityChange::Inactive, ACTIVE_STATUS_FAILED);
            } else {
                // Going active waits for a game pick from the grid.
                selected.set(Vec::new());
            }
        }
    };

    let on_game_click = move |name: String| {
        let next = toggle_game(&selected.get_untracked(), &name);
        selected.set(next.clone());
        apply(activity_for(next), ACTIVE_GAMES_FAILED);
    };

    let recent_games_view = move || {
        let shown = recent_games::matching_games(&games.get(), &recent.get());
        if shown.is_empty() {
            return view! { <p class="dashboard__empty">"No recent games"</p> }.into_any();
        }
        view! {
            <div class="dashboard-grid dashboard-grid--recent">
                {shown
                    .into_iter()
                    .map(|game| {
                        view! {
                            <div class="dashboard-box dashboard-box--static">
                                {game.image_url.clone().map(|src| view! { <img class="dashboard-box__thumb" src=src alt=game.name.clone()/> })}
                                <span>{game.name.clone()}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any()
    };

    view! {
        <div class="dashboard-wrapper">
            <TopBar/>
            <div class="dashboard-container">
                <div class="news">
                    {NEWS
                        .iter()
                        .map(|item| {
                            view! {
                                <article class="news__item">
                                    <img class="news__image" src=item.image alt=item.title/>
                                    <h5>{item.title}</h5>
                                    <a href=item.link target="_blank" rel="noopener noreferrer" class="dashboard-button">
                                        "Read More"
                                    </a>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <section class="dashboard__recent">
                    <h4 class="dashboard-subtitle">"Recent Games"</h4>
                    {recent_games_view}
                </section>

                <button
                    class="dashboard-button"
                    on:click=move |_| navigate(LOOKING_FOR_MEMBER_PATH, NavigateOptions::default())
                >
                    "Look For a Member"
                </button>

                <div class="dashboard__active">
                    <span class="dashboard__active-label">"Active"</span>
                    <input
                        type="checkbox"
                        class="switch"
                        prop:checked=move || is_active.get()
                        disabled=move || busy.get()
                        on:change=on_toggle_active
                    />
                    <Show when=move || !error.get().is_empty()>
                        <span class="dashboard__error">{move || error.get()}</span>
                    </Show>
                </div>

                <p class="dashboard__hint">"Select the games you want to be active in."</p>
                <div class="dashboard-grid">
                    {move || {
                        let current = selected.get();
                        games
                            .get()
                            .into_iter()
                            .map(|game| {
                                let on_click = on_game_click.clone();
                                let name = game.name.clone();
                                let active = current.contains(&game.name);
                                view! {
                                    <button
                                        class="dashboard-box"
                                        class=("dashboard-box--active", active)
                                        on:click=move |_| on_click(name.clone())
                                    >
                                        {game.image_url.clone().map(|src| view! { <img class="dashboard-box__thumb" src=src alt=game.name.clone()/> })}
                                        <span>{game.name.clone()}</span>
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </div>
        </div>
    }
}
