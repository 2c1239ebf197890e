//! # mot-client
//!
//! Leptos + WASM frontend for the MOT gaming social network.
//!
//! The crate holds the session store and route guards, the REST client that
//! injects the bearer token, and one page per screen. It builds for the
//! browser with `hydrate` and for server rendering with `ssr`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
