//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (header, drawer, dialogs) and the route
//! guards, reading session state from Leptos context.

pub mod confirm_dialog;
pub mod guards;
pub mod side_drawer;
pub mod top_bar;
