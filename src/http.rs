//! Shared HTTP client for fetching site pages.

use std::time::Duration;

use crate::config::AssistantConfig;
use crate::error::{AssistantError, Result};

/// User-Agent sent when the config does not set one.
pub const DEFAULT_USER_AGENT: &str = concat!("site-assistant/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] for page fetching.
///
/// The client has the configured timeout, a fixed or configured
/// User-Agent, and a bounded redirect policy.
///
/// # Errors
///
/// Returns [`AssistantError::Http`] if the client cannot be constructed.
pub fn build_client(config: &AssistantConfig) -> Result<reqwest::Client> {
    let ua = config
        .user_agent
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| AssistantError::Http(format!("failed to build HTTP client: {e}")))
}
