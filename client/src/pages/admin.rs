//! Admin landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::top_bar::TopBar;
use crate::util::auth::ADMIN_GAMES_PATH;

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <div class="dashboard-wrapper">
            <TopBar/>
            <div class="admin-container">
                <h2 class="admin-title">"Admin Dashboard"</h2>
                <div class="admin-card">
                    <h3>"Manage Games"</h3>
                    <p>"View, add, or delete games in the system."</p>
                    <A href=ADMIN_GAMES_PATH attr:class="dashboard-button">
                        "Go to Manage Games"
                    </A>
                </div>
            </div>
        </div>
    }
}
