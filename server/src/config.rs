//! Host configuration parsed from environment variables.
//!
//! Every variable is optional. The Firebase values are public web-app
//! settings forwarded to the browser through `/config.json`; push stays off
//! until the project id and the VAPID key are both present.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use tambo_client::net::types::{FirebaseWebConfig, RuntimeConfig};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_UPSTREAM_URL: &str = "https://localhost:7268/api";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} is not a valid {expected}: {value:?}")]
    Invalid { key: &'static str, expected: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Base URL of the REST backend, without a trailing slash.
    pub api_upstream_url: String,
    /// Origin serving uploaded files, without a trailing slash.
    pub media_upstream_url: String,
    pub upstream_timeout_secs: u64,
    /// Accept self-signed certificates from the upstream (development backend).
    pub accept_invalid_certs: bool,
    pub runtime: RuntimeConfig,
}

impl Config {
    /// Build the config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `API_UPSTREAM_URL`: default `https://localhost:7268/api`
    /// - `MEDIA_UPSTREAM_URL`: default `API_UPSTREAM_URL` minus its `/api` suffix
    /// - `UPSTREAM_TIMEOUT_SECS`: default 30
    /// - `UPSTREAM_ACCEPT_INVALID_CERTS`: default false
    /// - `FIREBASE_API_KEY`, `FIREBASE_AUTH_DOMAIN`, `FIREBASE_PROJECT_ID`,
    ///   `FIREBASE_STORAGE_BUCKET`, `FIREBASE_MESSAGING_SENDER_ID`,
    ///   `FIREBASE_APP_ID`, `FIREBASE_VAPID_KEY`
    ///
    /// # Errors
    ///
    /// A numeric or boolean variable that does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// A numeric or boolean variable that does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.parse().map_err(|_| invalid("PORT", "port number", raw))?,
            None => DEFAULT_PORT,
        };
        let upstream_timeout_secs = match var("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => raw.parse().map_err(|_| invalid("UPSTREAM_TIMEOUT_SECS", "number of seconds", raw))?,
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };
        let accept_invalid_certs = match var("UPSTREAM_ACCEPT_INVALID_CERTS") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| invalid("UPSTREAM_ACCEPT_INVALID_CERTS", "boolean", raw))?,
            None => false,
        };

        let api_upstream_url =
            var("API_UPSTREAM_URL").unwrap_or_else(|| DEFAULT_API_UPSTREAM_URL.to_owned()).trim_end_matches('/').to_owned();
        let media_upstream_url = var("MEDIA_UPSTREAM_URL")
            .map(|u| u.trim_end_matches('/').to_owned())
            .unwrap_or_else(|| media_origin(&api_upstream_url));

        let firebase = FirebaseWebConfig {
            api_key: var("FIREBASE_API_KEY").unwrap_or_default(),
            auth_domain: var("FIREBASE_AUTH_DOMAIN").unwrap_or_default(),
            project_id: var("FIREBASE_PROJECT_ID").unwrap_or_default(),
            storage_bucket: var("FIREBASE_STORAGE_BUCKET").unwrap_or_default(),
            messaging_sender_id: var("FIREBASE_MESSAGING_SENDER_ID").unwrap_or_default(),
            app_id: var("FIREBASE_APP_ID").unwrap_or_default(),
        };
        let runtime = RuntimeConfig { firebase, vapid_key: var("FIREBASE_VAPID_KEY").unwrap_or_default() };

        Ok(Self { port, api_upstream_url, media_upstream_url, upstream_timeout_secs, accept_invalid_certs, runtime })
    }
}

fn invalid(key: &'static str, expected: &'static str, value: String) -> ConfigError {
    ConfigError::Invalid { key, expected, value }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Strip a trailing `/api` segment to get the backend origin.
fn media_origin(api_url: &str) -> String {
    api_url.strip_suffix("/api").unwrap_or(api_url).to_owned()
}
