//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, local form state,
//! error strings) and delegates shared chrome to `components`.

pub mod admin;
pub mod auth;
pub mod chat;
pub mod chat_list;
pub mod dashboard;
pub mod looking_for_member;
pub mod manage_games;
pub mod profile;
pub mod splash;
