//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the immutable host config and one pooled `reqwest::Client` used by
//! the backend proxy.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;

const CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("failed to build upstream http client: {0}")]
    HttpClientBuild(String),
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build the state and its upstream client.
    ///
    /// # Errors
    ///
    /// The TLS backend could not be initialised.
    pub fn new(config: Config) -> Result<Self, StateError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| StateError::HttpClientBuild(e.to_string()))?;
        Ok(Self { config: Arc::new(config), http })
    }
}
