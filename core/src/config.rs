//! Client configuration.
//!
//! The base URL is resolved once by the caller's startup code and handed to
//! `GameApiClient::new`; operations never consult the environment.

use std::env;

/// Base URL used when `CHESS_API_URL` is unset or empty.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Environment variable that overrides the base URL.
pub const BASE_URL_ENV: &str = "CHESS_API_URL";

/// Client configuration. Resolve it once at startup and hand it to
/// `GameApiClient::new`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same resolution as `from_env`, against an arbitrary lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            base_url: lookup(BASE_URL_ENV)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
