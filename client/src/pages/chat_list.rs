//! Conversation list with delete confirmation.

#[cfg(test)]
#[path = "chat_list_test.rs"]
mod chat_list_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::top_bar::TopBar;
use crate::net::api::ApiClient;
use crate::net::types::ChatSummary;
use crate::state::session::SessionContext;
use crate::util::auth::chat_path;
use crate::util::format::{avatar_or_default, format_timestamp};

/// Display row for one conversation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatRow {
    pub chat_id: String,
    pub other_id: String,
    pub other_name: String,
    pub avatar: String,
    pub last_text: String,
    pub last_time: String,
}

/// Rows for every chat that has a participant other than `me`.
pub fn chat_rows(chats: &[ChatSummary], me: &str) -> Vec<ChatRow> {
    chats
        .iter()
        .filter_map(|chat| {
            let other = chat.other_participant(me)?;
            let last = chat.last_message();
            Some(ChatRow {
                chat_id: chat.id.clone(),
                other_id: other.id.clone(),
                other_name: other.name.clone(),
                avatar: avatar_or_default(other.avatar.as_deref()),
                last_text: last.map(|m| m.text.clone()).unwrap_or_default(),
                last_time: last.map(|m| format_timestamp(&m.timestamp)).unwrap_or_default(),
            })
        })
        .collect()
}

#[component]
pub fn ChatListPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();

    let chats = RwSignal::new(Vec::<ChatSummary>::new());
    let loading = RwSignal::new(true);
    let deleting = RwSignal::new(None::<String>);
    let confirm = RwSignal::new(None::<String>);

    {
        let api = api.clone();
        Effect::new(move |_| {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.chat().list().await {
                    Ok(list) => chats.set(list),
                    Err(e) => {
                        log::warn!("chat list: load failed: {e}");
                        chats.set(Vec::new());
                    }
                }
                loading.set(false);
            });
        });
    }

    let on_confirm = Callback::new(move |()| {
        let Some(chat_id) = confirm.get_untracked() else {
            return;
        };
        confirm.set(None);
        deleting.set(Some(chat_id.clone()));
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.chat().delete(&chat_id).await {
                Ok(()) => chats.update(|list| list.retain(|c| c.id != chat_id)),
                Err(e) => log::warn!("chat list: delete failed: {e}"),
            }
            deleting.set(None);
        });
    });
    let on_cancel = Callback::new(move |()| confirm.set(None));

    let rows = move || {
        let me = session.get().user_id().unwrap_or_default().to_owned();
        chat_rows(&chats.get(), &me)
    };

    view! {
        <div class="chatlist-wrapper">
            <TopBar/>
            <div class="chatlist-content">
                {move || {
                    if loading.get() {
                        return view! { <div>"Loading..."</div> }.into_any();
                    }
                    let rows = rows();
                    if rows.is_empty() {
                        return view! { <div>"No chats yet."</div> }.into_any();
                    }
                    rows.into_iter()
                        .map(|row| {
                            let navigate = navigate.clone();
                            let target = chat_path(&row.other_id);
                            let chat_id = row.chat_id.clone();
                            let busy_id = row.chat_id.clone();
                            let is_deleting = move || deleting.get().as_deref() == Some(busy_id.as_str());
                            let is_deleting_label = is_deleting.clone();
                            view! {
                                <div class="chat-card" on:click=move |_| navigate(&target, NavigateOptions::default())>
                                    <div class="chat-left">
                                        <img class="chat-avatar" src=row.avatar alt=row.other_name.clone()/>
                                        <div class="chat-info">
                                            <div class="chat-name">{row.other_name}</div>
                                            <div class="chat-message">{row.last_text}</div>
                                        </div>
                                    </div>
                                    <div class="chat-timestamp">{row.last_time}</div>
                                    <button
                                        class="chat-delete-btn"
                                        disabled=is_deleting.clone()
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            confirm.set(Some(chat_id.clone()));
                                        }
                                    >
                                        {move || if is_deleting_label() { "Deleting..." } else { "Delete" }}
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>
            <Show when=move || confirm.get().is_some()>
                <ConfirmDialog
                    title="Confirm Delete"
                    message="Are you sure you want to delete this chat?"
                    on_confirm=on_confirm
                    on_cancel=on_cancel
                />
            </Show>
        </div>
    }
}
