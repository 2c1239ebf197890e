//! Server configuration parsed from environment variables.
//!
//! ERROR HANDLING
//! ==============
//! Unset variables fall back to defaults. A set but malformed value is an
//! error so a typo in deployment config fails startup instead of binding an
//! unexpected port.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value: {value:?}")]
    InvalidPort { value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Overrides the Leptos `site-root` when set.
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `SITE_ROOT`: directory holding `pkg/` and static assets
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is not a `u16`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is not a `u16`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort { value: raw })?,
        };
        let site_root = lookup("SITE_ROOT").filter(|s| !s.trim().is_empty()).map(PathBuf::from);
        Ok(Self { port, site_root })
    }

    /// Static root, preferring the override over the Leptos default.
    pub fn site_root_or(&self, leptos_site_root: &str) -> PathBuf {
        self.site_root.clone().unwrap_or_else(|| PathBuf::from(leptos_site_root))
    }
}
