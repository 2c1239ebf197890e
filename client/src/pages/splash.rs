//! Splash screen shown at the root for visitors without a known role.
//!
//! After a fixed delay it leaves for the dashboard or the login page based on
//! the persisted logged-in flag alone; the token is not consulted.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionContext;

#[component]
pub fn SplashPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();

    Effect::new(move |_| {
        #[cfg(feature = "hydrate")]
        {
            use std::sync::Arc;
            use std::sync::atomic::{AtomicBool, Ordering};

            let navigate = navigate.clone();
            let session = session.clone();
            let alive = Arc::new(AtomicBool::new(true));
            let alive_task = alive.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(crate::util::auth::SPLASH_DELAY).await;
                if !alive_task.load(Ordering::Relaxed) {
                    return;
                }
                let target = crate::util::auth::splash_target(session.store().is_logged_in());
                navigate(target, leptos_router::NavigateOptions::default());
            });
            on_cleanup(move || alive.store(false, Ordering::Relaxed));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &navigate);
        }
    });

    view! {
        <div class="splash-page">
            <img src="/MOT.png" alt="Logo" class="splash-page__logo"/>
            <div class="spinner" aria-hidden="true"></div>
            <p class="splash-page__text">"Loading your dashboard..."</p>
        </div>
    }
}
