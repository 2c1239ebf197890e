//! Admin game catalog: list, add, delete.
//!
//! ERROR HANDLING
//! ==============
//! Each action shows its own static message; the list is re-fetched after
//! every successful change instead of being patched locally.

#[cfg(test)]
#[path = "manage_games_test.rs"]
mod manage_games_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::top_bar::TopBar;
use crate::net::api::ApiClient;
use crate::net::types::{Game, GameDraft};

pub const LOAD_GAMES_FAILED: &str = "Failed to load games.";
pub const ADD_GAME_FAILED: &str = "Failed to add game.";
pub const DELETE_GAME_FAILED: &str = "Failed to delete game.";

/// Build a create payload, or `None` when the name is blank.
pub fn game_draft(name: &str, image_url: &str) -> Option<GameDraft> {
    if name.trim().is_empty() {
        return None;
    }
    Some(GameDraft { name: name.to_owned(), image_url: image_url.trim().to_owned() })
}

#[component]
pub fn ManageGamesPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let games = RwSignal::new(Vec::<Game>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let image_url = RwSignal::new(String::new());
    let adding = RwSignal::new(false);
    let deleting = RwSignal::new(None::<String>);
    let confirm = RwSignal::new(None::<String>);

    let refresh = {
        let api = api.clone();
        Callback::new(move |()| {
            loading.set(true);
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.games().list().await {
                    Ok(list) => games.set(list),
                    Err(e) => {
                        log::warn!("manage games: load failed: {e}");
                        error.set(LOAD_GAMES_FAILED.to_owned());
                    }
                }
                loading.set(false);
            });
        })
    };

    Effect::new(move |_| refresh.run(()));

    let on_add = {
        let api = api.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(draft) = game_draft(&name.get_untracked(), &image_url.get_untracked()) else {
                return;
            };
            adding.set(true);
            error.set(String::new());
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.games().create(&draft).await {
                    Ok(()) => {
                        name.set(String::new());
                        image_url.set(String::new());
                        refresh.run(());
                    }
                    Err(e) => {
                        log::warn!("manage games: create failed: {e}");
                        error.set(ADD_GAME_FAILED.to_owned());
                    }
                }
                adding.set(false);
            });
        }
    };

    let on_confirm = Callback::new(move |()| {
        let Some(id) = confirm.get_untracked() else {
            return;
        };
        confirm.set(None);
        deleting.set(Some(id.clone()));
        error.set(String::new());
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.games().delete(&id).await {
                Ok(()) => refresh.run(()),
                Err(e) => {
                    log::warn!("manage games: delete failed: {e}");
                    error.set(DELETE_GAME_FAILED.to_owned());
                }
            }
            deleting.set(None);
        });
    });
    let on_cancel = Callback::new(move |()| confirm.set(None));

    let list = move || {
        if loading.get() {
            return view! { <div class="spinner"></div> }.into_any();
        }
        view! {
            <ul class="game-admin-list">
                {games
                    .get()
                    .into_iter()
                    .map(|game| {
                        let id = game.id.clone();
                        let busy_id = game.id.clone();
                        let is_deleting = move || deleting.get().as_deref() == Some(busy_id.as_str());
                        let is_deleting_label = is_deleting.clone();
                        view! {
                            <li class="game-admin-row">
                                <span>
                                    {game.image_url.clone().filter(|u| !u.is_empty()).map(|src| view! { <img class="game-admin-row__thumb" src=src alt=game.name.clone()/> })}
                                    {game.name.clone()}
                                </span>
                                <button
                                    class="btn btn--danger"
                                    disabled=is_deleting.clone()
                                    on:click=move |_| confirm.set(Some(id.clone()))
                                >
                                    {move || if is_deleting_label() { "Deleting..." } else { "Delete" }}
                                </button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        }
        .into_any()
    };

    view! {
        <div class="dashboard-wrapper">
            <TopBar/>
            <div class="admin-container">
                <h2 class="admin-title">"Manage Games"</h2>
                <form class="game-admin-form" on:submit=on_add>
                    <input
                        type="text"
                        placeholder="New game name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        type="url"
                        placeholder="Image URL"
                        prop:value=move || image_url.get()
                        on:input=move |ev| image_url.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || adding.get()>
                        {move || if adding.get() { "Adding..." } else { "Add Game" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="text-danger">{move || error.get()}</p>
                </Show>
                {list}
            </div>
            <Show when=move || confirm.get().is_some()>
                <ConfirmDialog
                    title="Confirm Delete"
                    message="Are you sure you want to delete this game?"
                    on_confirm=on_confirm
                    on_cancel=on_cancel
                />
            </Show>
        </div>
    }
}
