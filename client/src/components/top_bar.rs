//! App header with the logo and the navigation drawer.

use leptos::prelude::*;

use crate::components::side_drawer::SideDrawer;

#[component]
pub fn TopBar() -> impl IntoView {
    view! {
        <header class="topbar">
            <SideDrawer/>
            <img src="/MOT.png" alt="App Logo" class="topbar__logo"/>
        </header>
    }
}
