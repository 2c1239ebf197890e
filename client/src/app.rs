//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guards::{RequireAdmin, RequireAuth, RoleRedirect};
use crate::net::api::{ApiClient, ApiConfig};
use crate::pages::{
    admin::AdminPage, auth::AuthPage, chat::ChatPage, chat_list::ChatListPage, dashboard::DashboardPage,
    looking_for_member::LookingForMemberPage, manage_games::ManageGamesPage, profile::ProfilePage, splash::SplashPage,
};
use crate::state::session::SessionContext;
use crate::util::session::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and API client contexts. The session snapshot is read
/// from storage once the app is live in the browser; until then every guard
/// renders nothing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionContext::new(SessionStore::browser());
    let api = ApiClient::new(ApiConfig::from_build_env(), session.clone());
    provide_context(session.clone());
    provide_context(api);

    Effect::new(move |_| session.load());

    view! {
        <Stylesheet id="leptos" href="/pkg/mot.css"/>
        <Title text="MOT"/>

        <Router>
            <Routes fallback=|| view! { <SplashPage/> }>
                <Route path=StaticSegment("") view=RoleRedirect/>
                <Route path=StaticSegment("auth") view=AuthPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| view! { <RequireAuth><ProfilePage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("profile"), ParamSegment("id"))
                    view=|| view! { <RequireAuth><ProfilePage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("looking-for-member")
                    view=|| view! { <RequireAuth><LookingForMemberPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("chats")
                    view=|| view! { <RequireAuth><ChatListPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("chats"), ParamSegment("id"))
                    view=|| view! { <RequireAuth><ChatPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| view! { <RequireAuth><RequireAdmin><AdminPage/></RequireAdmin></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("games"))
                    view=|| view! { <RequireAuth><RequireAdmin><ManageGamesPage/></RequireAdmin></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}
