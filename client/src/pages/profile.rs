//! Profile page for `/profile` (own, editable) and `/profile/:id`.
//!
//! A missing or literal `undefined` id loads `/users/me`; any other id loads
//! `/users/:id`, the viewer's own included. The edit form shows when the id is
//! missing or matches the viewer; any other profile is read-only.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::top_bar::TopBar;
use crate::net::api::ApiClient;
use crate::net::types::{ProfileUpdate, UserProfile};
use crate::state::session::SessionContext;
use crate::util::format::{PLATFORMS, avatar_or_default, platform_summary};

pub const LOAD_PROFILE_FAILED: &str = "Failed to load profile.";
pub const SAVE_PROFILE_FAILED: &str = "Failed to save profile.";
pub const PROFILE_SAVED: &str = "Profile saved!";

pub const FAVORITE_GAME_OPTIONS: [&str; 4] = ["FIFA", "Valorant", "League of Legends", "Minecraft"];

/// Route id to fetch, or `None` for the viewer's own profile.
pub fn requested_id(param: Option<&str>) -> Option<&str> {
    param.filter(|id| !id.is_empty() && *id != "undefined")
}

pub fn is_own_profile(param: Option<&str>, viewer: Option<&str>) -> bool {
    match requested_id(param) {
        None => true,
        Some(id) => viewer == Some(id),
    }
}

/// Editable profile fields. Platforms are flags in [`PLATFORMS`] order and
/// the favorite game is a single pick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub description: String,
    pub gamertag: String,
    pub discord: String,
    pub platforms: [bool; PLATFORMS.len()],
    pub favorite_game: String,
    pub avatar: String,
}

impl ProfileForm {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            description: profile.description.clone(),
            gamertag: profile.gamertag.clone(),
            discord: profile.discord.clone(),
            platforms: PLATFORMS.map(|p| profile.platforms.iter().any(|have| have == p)),
            favorite_game: profile.favorite_games.first().cloned().unwrap_or_default(),
            avatar: profile.avatar.clone().unwrap_or_default(),
        }
    }

    pub fn selected_platforms(&self) -> Vec<String> {
        PLATFORMS
            .iter()
            .zip(self.platforms)
            .filter(|(_, on)| *on)
            .map(|(p, _)| (*p).to_owned())
            .collect()
    }

    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            name: self.name.clone(),
            description: self.description.clone(),
            gamertag: self.gamertag.clone(),
            discord: self.discord.clone(),
            platforms: self.selected_platforms(),
            favorite_games: if self.favorite_game.is_empty() { Vec::new() } else { vec![self.favorite_game.clone()] },
            avatar: self.avatar.clone(),
        }
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionContext>();
    let params = use_params_map();

    let route_id = Memo::new(move |_| params.read().get("id"));
    let own = Memo::new(move |_| {
        let state = session.state().get();
        is_own_profile(route_id.get().as_deref(), state.user_id())
    });

    let form = RwSignal::new(ProfileForm::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());

    {
        let api = api.clone();
        Effect::new(move |_| {
            let id = route_id.get();
            loading.set(true);
            error.set(String::new());
            success.set(String::new());
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = match requested_id(id.as_deref()) {
                    Some(id) => api.users().get(id).await,
                    None => api.users().get_profile().await,
                };
                match result {
                    Ok(profile) => form.set(ProfileForm::from_profile(&profile)),
                    Err(e) => {
                        log::warn!("profile: load failed: {e}");
                        error.set(LOAD_PROFILE_FAILED.to_owned());
                    }
                }
                loading.set(false);
            });
        });
    }

    let on_save = move |_: leptos::ev::MouseEvent| {
        error.set(String::new());
        success.set(String::new());
        loading.set(true);
        let update = form.get_untracked().to_update();
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.users().update_profile(&update).await {
                Ok(()) => success.set(PROFILE_SAVED.to_owned()),
                Err(e) => {
                    log::warn!("profile: save failed: {e}");
                    error.set(SAVE_PROFILE_FAILED.to_owned());
                }
            }
            loading.set(false);
        });
    };

    let text_field = move |label: &'static str, get: fn(&ProfileForm) -> String, set: fn(&mut ProfileForm, String)| {
        view! {
            <label class="profile-label">
                {label}
                <input
                    class="profile-input"
                    type="text"
                    prop:value=move || get(&form.get())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| set(f, value));
                    }
                />
            </label>
        }
    };

    let editor = move || {
        view! {
            <div class="profile-form">
                <label class="profile-label">
                    "Avatar URL"
                    <input
                        class="profile-input"
                        type="url"
                        prop:value=move || form.get().avatar
                        on:input=move |ev| form.update(|f| f.avatar = event_target_value(&ev))
                    />
                </label>
                {text_field("Name", |f| f.name.clone(), |f, v| f.name = v)}
                {text_field("Description", |f| f.description.clone(), |f, v| f.description = v)}
                {text_field("Gamer Tag", |f| f.gamertag.clone(), |f, v| f.gamertag = v)}
                {text_field("Discord", |f| f.discord.clone(), |f, v| f.discord = v)}
                <div class="platform-section">
                    <span class="profile-label">"Platforms"</span>
                    {PLATFORMS
                        .iter()
                        .enumerate()
                        .map(|(idx, platform)| {
                            view! {
                                <label class="platform-option">
                                    <img src=format!("/{platform}.png") alt=*platform height="40"/>
                                    <input
                                        type="checkbox"
                                        prop:checked=move || form.get().platforms[idx]
                                        on:change=move |_| form.update(|f| f.platforms[idx] = !f.platforms[idx])
                                    />
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <label class="profile-label">
                    "Favorite Games"
                    <select
                        class="profile-input"
                        prop:value=move || form.get().favorite_game
                        on:change=move |ev| form.update(|f| f.favorite_game = event_target_value(&ev))
                    >
                        <option value="">"Select favorite games"</option>
                        {FAVORITE_GAME_OPTIONS
                            .into_iter()
                            .map(|name| view! { <option value=name>{name}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <button class="profile-save" disabled=move || loading.get() on:click=on_save.clone()>
                    {move || if loading.get() { "Saving..." } else { "Save" }}
                </button>
            </div>
        }
    };

    let readonly = move || {
        let f = form.get();
        let favorite = if f.favorite_game.is_empty() { "None".to_owned() } else { f.favorite_game.clone() };
        view! {
            <div class="profile-readonly">
                <div><strong>"Name: "</strong>{f.name.clone()}</div>
                <div><strong>"Description: "</strong>{f.description.clone()}</div>
                <div><strong>"Gamer Tag: "</strong>{f.gamertag.clone()}</div>
                <div><strong>"Discord: "</strong>{f.discord.clone()}</div>
                <div><strong>"Platforms: "</strong>{platform_summary(&f.selected_platforms())}</div>
                <div><strong>"Favorite Games: "</strong>{favorite}</div>
            </div>
        }
    };

    view! {
        <div class="profile-wrapper">
            <TopBar/>
            <div class="profile-container">
                <Show when=move || !error.get().is_empty()>
                    <p class="alert alert--danger">{move || error.get()}</p>
                </Show>
                <Show when=move || !success.get().is_empty()>
                    <p class="alert alert--success">{move || success.get()}</p>
                </Show>
                <img
                    class="profile-picture"
                    src=move || avatar_or_default(Some(form.get().avatar.as_str()))
                    alt="Profile"
                />
                <Show when=move || own.get() fallback=readonly>
                    {editor.clone()}
                </Show>
            </div>
        </div>
    }
}
