//! Slide-out navigation drawer with a role-conditioned menu and sign-out.

#[cfg(test)]
#[path = "side_drawer_test.rs"]
mod side_drawer_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionContext;
use crate::util::auth::{ADMIN_PATH, AUTH_PATH, CHATS_PATH, DASHBOARD_PATH, LOOKING_FOR_MEMBER_PATH, PROFILE_PATH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub path: &'static str,
}

const ADMIN_MENU: &[MenuItem] = &[MenuItem { label: "Home", path: ADMIN_PATH }];

const USER_MENU: &[MenuItem] = &[
    MenuItem { label: "Home", path: DASHBOARD_PATH },
    MenuItem { label: "Profile", path: PROFILE_PATH },
    MenuItem { label: "Chats", path: CHATS_PATH },
    MenuItem { label: "Looking for Member", path: LOOKING_FOR_MEMBER_PATH },
];

/// Menu entries for the current role.
pub fn menu_items(is_admin: bool) -> &'static [MenuItem] {
    if is_admin { ADMIN_MENU } else { USER_MENU }
}

#[component]
pub fn SideDrawer() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let state = session.state();
    let navigate = use_navigate();
    let open = RwSignal::new(false);

    let go = {
        let navigate = navigate.clone();
        move |path: &'static str| {
            open.set(false);
            navigate(path, NavigateOptions::default());
        }
    };

    let on_sign_out = move |_| {
        open.set(false);
        session.clear_session();
        navigate(AUTH_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
    };

    view! {
        <button class="drawer-toggle" aria-label="toggle drawer" on:click=move |_| open.update(|o| *o = !*o)>
            "☰"
        </button>
        <Show when=move || open.get()>
            <div class="drawer-backdrop" on:click=move |_| open.set(false)></div>
        </Show>
        <nav class="drawer" class=("drawer--open", move || open.get())>
            <ul class="drawer__list">
                {
                    move || {
                        menu_items(state.get().is_admin())
                            .iter()
                            .map(|item| {
                                let go = go.clone();
                                let path = item.path;
                                view! {
                                    <li>
                                        <button class="drawer__item" on:click=move |_| go(path)>
                                            {item.label}
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }
                }
            </ul>
            <div class="drawer__divider"></div>
            <ul class="drawer__list">
                <li>
                    <button class="drawer__item drawer__item--signout" on:click=on_sign_out>
                        "Sign Out"
                    </button>
                </li>
            </ul>
        </nav>
    }
}
