//! Route guard components wrapping protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each guard memoizes its decision over the session signal, so a sign-out or
//! a rejected token re-routes the visible page without a reload. Redirects
//! replace the history entry; back-navigation cannot return to the guarded
//! view.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::pages::splash::SplashPage;
use crate::state::session::SessionContext;
use crate::util::auth::{GateOutcome, RootOutcome, admin_gate, authentication_gate, root_redirect};

fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

fn redirect_view(path: &'static str) -> AnyView {
    log::debug!("guard redirect to {path}");
    view! { <Redirect path=path options=replace_history()/> }.into_any()
}

fn gate_view(outcome: GateOutcome, children: &ChildrenFn) -> AnyView {
    match outcome {
        GateOutcome::Pending => ().into_any(),
        GateOutcome::Render => children().into_any(),
        GateOutcome::Redirect(path) => redirect_view(path),
    }
}

/// Renders `children` only while a session token is stored.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let state = expect_context::<SessionContext>().state();
    let outcome = Memo::new(move |_| authentication_gate(&state.get()));
    move || gate_view(outcome.get(), &children)
}

/// Renders `children` only for admins. Nest inside [`RequireAuth`].
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let state = expect_context::<SessionContext>().state();
    let outcome = Memo::new(move |_| admin_gate(&state.get()));
    move || gate_view(outcome.get(), &children)
}

/// Root path: admins to `/admin`, users to `/dashboard`, anyone else sees
/// the splash screen.
#[component]
pub fn RoleRedirect() -> impl IntoView {
    let state = expect_context::<SessionContext>().state();
    let outcome = Memo::new(move |_| root_redirect(&state.get()));
    move || match outcome.get() {
        RootOutcome::Pending => ().into_any(),
        RootOutcome::Redirect(path) => redirect_view(path),
        RootOutcome::Splash => view! { <SplashPage/> }.into_any(),
    }
}
