//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser storage and routing decisions from page
//! and component logic so they can be tested without a DOM.

pub mod auth;
pub mod format;
pub mod recent_games;
pub mod session;
pub mod storage;
