//! One-to-one chat thread at `/chats/:id`, where `id` is the other user.
//!
//! The backend returns the whole thread after each send, so the message list
//! is replaced rather than appended.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::side_drawer::SideDrawer;
use crate::net::api::ApiClient;
use crate::net::types::{ChatMessage, UserProfile};
use crate::state::session::SessionContext;
use crate::util::auth::profile_path;
use crate::util::format::{avatar_or_default, format_time};

pub const LOAD_CHAT_FAILED: &str = "Failed to load chat.";
pub const SEND_FAILED: &str = "Failed to send message.";

pub fn is_mine(message: &ChatMessage, me: Option<&str>) -> bool {
    me.is_some_and(|id| message.sender.id == id)
}

/// Text to send, or `None` when the input is blank.
pub fn outgoing_text(input: &str) -> Option<&str> {
    (!input.trim().is_empty()).then_some(input)
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionContext>();
    let params = use_params_map();
    let other_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    let messages = RwSignal::new(Vec::<ChatMessage>::new());
    let other = RwSignal::new(None::<UserProfile>);
    let input = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let body_ref = NodeRef::<leptos::html::Div>::new();

    {
        let api = api.clone();
        Effect::new(move |_| {
            let id = other_id.get();
            loading.set(true);
            error.set(String::new());
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let loaded = async {
                    let thread = api.chat().with_user(&id).await?;
                    messages.set(thread.messages);
                    other.set(Some(api.users().get(&id).await?));
                    Ok::<(), crate::net::api::ApiError>(())
                };
                if let Err(e) = loaded.await {
                    log::warn!("chat: load failed: {e}");
                    error.set(LOAD_CHAT_FAILED.to_owned());
                }
                loading.set(false);
            });
        });
    }

    Effect::new(move |_| {
        messages.track();
        #[cfg(feature = "hydrate")]
        {
            if let Some(body) = body_ref.get() {
                body.set_scroll_top(body.scroll_height());
            }
        }
    });

    let send = Callback::new(move |()| {
        let text = input.get_untracked();
        let Some(text) = outgoing_text(&text).map(str::to_owned) else {
            return;
        };
        let id = other_id.get_untracked();
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.chat().send_message(&id, &text).await {
                Ok(thread) => {
                    messages.set(thread.messages);
                    input.set(String::new());
                }
                Err(e) => {
                    log::warn!("chat: send failed: {e}");
                    error.set(SEND_FAILED.to_owned());
                }
            }
        });
    });

    let header = move || {
        other.get().map(|user| {
            let href = profile_path(&user.id);
            view! {
                <a class="chat-topbar-userinfo" href=href>
                    <img class="chat-topbar-avatar" src=avatar_or_default(user.avatar.as_deref()) alt="avatar"/>
                    <span class="chat-topbar-name">{user.name}</span>
                </a>
            }
        })
    };

    let bubbles = move || {
        if loading.get() {
            return view! { <div class="chat-loading">"Loading..."</div> }.into_any();
        }
        let err = error.get();
        if !err.is_empty() {
            return view! { <div class="chat-error">{err}</div> }.into_any();
        }
        let state = session.get();
        let me = state.user_id();
        messages
            .get()
            .into_iter()
            .map(|msg| {
                let side = if is_mine(&msg, me) { "me" } else { "them" };
                view! {
                    <div class=format!("chat-message-row {side}")>
                        <div class=format!("chat-bubble {side}-bubble")>
                            <div class="chat-bubble-text">{msg.text}</div>
                            <div class="chat-bubble-time">{format_time(&msg.timestamp)}</div>
                        </div>
                    </div>
                }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <div class="chat-wrapper">
            <div class="chat-topbar">
                <SideDrawer/>
                {header}
            </div>
            <div class="chat-body" node_ref=body_ref>
                {bubbles}
            </div>
            <div class="chat-input-bar">
                <input
                    class="chat-input"
                    type="text"
                    placeholder="Type a message"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            send.run(());
                        }
                    }
                />
                <button class="chat-send-btn" aria-label="send" on:click=move |_| send.run(())>
                    "►"
                </button>
            </div>
        </div>
    }
}
