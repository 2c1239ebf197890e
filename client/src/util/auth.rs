//! Route-guard decisions and route paths.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guard components in `components::guards` call these per navigation. Every
//! input, including an unreadable user record, maps to a render or a default
//! redirect; nothing here can fail.
//!
//! Admin routes nest the admin gate inside the authentication gate, so a
//! signed-out visitor to `/admin` lands on `/auth`, not `/dashboard`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::time::Duration;

use crate::state::session::{Role, SessionState};

pub const ROOT_PATH: &str = "/";
pub const AUTH_PATH: &str = "/auth";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const PROFILE_PATH: &str = "/profile";
pub const LOOKING_FOR_MEMBER_PATH: &str = "/looking-for-member";
pub const CHATS_PATH: &str = "/chats";
pub const ADMIN_PATH: &str = "/admin";
pub const ADMIN_GAMES_PATH: &str = "/admin/games";

/// Delay before the splash screen leaves.
pub const SPLASH_DELAY: Duration = Duration::from_secs(2);

pub fn profile_path(user_id: &str) -> String {
    format!("{PROFILE_PATH}/{user_id}")
}

pub fn chat_path(user_id: &str) -> String {
    format!("{CHATS_PATH}/{user_id}")
}

/// Outcome of the authentication and admin gates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    /// Session not read from storage yet; render nothing.
    Pending,
    Render,
    /// Replace the current history entry with this path.
    Redirect(&'static str),
}

/// Outcome of the root-path role redirect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootOutcome {
    Pending,
    Redirect(&'static str),
    Splash,
}

/// Token presence alone gates protected views.
pub fn authentication_gate(session: &SessionState) -> GateOutcome {
    if !session.loaded {
        return GateOutcome::Pending;
    }
    if session.is_authenticated() {
        GateOutcome::Render
    } else {
        GateOutcome::Redirect(AUTH_PATH)
    }
}

/// Non-admins are sent to the dashboard.
pub fn admin_gate(session: &SessionState) -> GateOutcome {
    if !session.loaded {
        return GateOutcome::Pending;
    }
    if session.is_admin() {
        GateOutcome::Render
    } else {
        GateOutcome::Redirect(DASHBOARD_PATH)
    }
}

/// Both gates in nesting order: authentication first, then admin.
pub fn admin_route_gate(session: &SessionState) -> GateOutcome {
    match authentication_gate(session) {
        GateOutcome::Render => admin_gate(session),
        other => other,
    }
}

/// Root path: send known roles home, otherwise show the splash screen.
pub fn root_redirect(session: &SessionState) -> RootOutcome {
    if !session.loaded {
        return RootOutcome::Pending;
    }
    match session.role() {
        Some(Role::Admin) => RootOutcome::Redirect(ADMIN_PATH),
        Some(Role::User) => RootOutcome::Redirect(DASHBOARD_PATH),
        None => RootOutcome::Splash,
    }
}

/// Where the splash screen goes once its timer fires. Only the logged-in
/// flag is consulted, never the token.
pub fn splash_target(is_logged_in: bool) -> &'static str {
    if is_logged_in { DASHBOARD_PATH } else { AUTH_PATH }
}

/// Landing page right after a successful login or registration.
pub fn home_for_role(role: Option<Role>) -> &'static str {
    if role == Some(Role::Admin) { ADMIN_PATH } else { DASHBOARD_PATH }
}
