//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues authenticated HTTP calls and `types` defines the shared wire
//! schema.

pub mod api;
pub mod types;
