//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server owns no API of its own: the browser calls the REST backend
//! directly. This router renders the Leptos shell for every app route,
//! serves the compiled `/pkg` bundle, answers `/healthz`, and falls back to
//! static files under the site root (logo, default avatar, platform icons).

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, ServerConfig};

/// Static routes that do not depend on Leptos options.
fn static_routes(site_root: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(site_root))
}

/// Full app: Leptos SSR routes, static assets and request tracing.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` / `LEPTOS_*` settings).
pub fn app(config: &ServerConfig) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let site_root = config.site_root_or(leptos_options.site_root.as_ref());
    let routes = generate_route_list(client::app::App);
    tracing::debug!(count = routes.len(), site_root = %site_root.display(), "leptos routes generated");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    Ok(leptos_router.merge(static_routes(&site_root)).layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
