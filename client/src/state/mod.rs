//! Application state modules.

pub mod session;
