//! Centralized server configuration.
//!
//! Configuration is loaded once in `main` via the `config` crate from
//! environment variables and handed to the components that need it.
//! Nested keys use `__` as a separator, e.g. `SESSION__COOKIE_NAME`.

use serde::Deserialize;

/// Top-level server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// PostgreSQL database connection URL.
    pub database_url: String,

    /// Socket address to listen on.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Session lookup configuration.
    #[serde(default)]
    pub session: SessionConfig,

    /// Access guard configuration.
    #[serde(default)]
    pub access: AccessConfig,
}

/// Session-related configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session ID.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Interval between expired-session cleanup runs, in seconds.
    #[serde(default = "default_cleanup_interval_seconds")]
    pub cleanup_interval_seconds: u64,
}

/// Access guard configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessConfig {
    /// Where page routes send denied requests.
    #[serde(default = "default_denied_redirect")]
    pub denied_redirect: String,
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_cookie_name() -> String {
    "session".to_string()
}

fn default_cleanup_interval_seconds() -> u64 {
    300
}

fn default_denied_redirect() -> String {
    "/".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            cleanup_interval_seconds: default_cleanup_interval_seconds(),
        }
    }
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            denied_redirect: default_denied_redirect(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
