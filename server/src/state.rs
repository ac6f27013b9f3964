//! Shared application state for request handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Cloneable handler state: one pooled HTTP client plus the upstream config.
///
/// No overall request timeout is set — the UI contract is that a hung
/// upstream call hangs the initiating control, not that the proxy invents a
/// failure. Only the connect phase is bounded.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build the shared HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend fails to initialize.
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http, config: Arc::new(config) })
    }
}
