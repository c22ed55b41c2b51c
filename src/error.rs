//! Error types for the site-assistant crate.
//!
//! Only configuration and client construction surface errors to callers.
//! Per-page fetch and extraction failures are absorbed by the indexer.

/// Errors that can occur while configuring or feeding the assistant.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    /// A page could not be fetched, or the HTTP client could not be built.
    #[error("HTTP error: {0}")]
    Http(String),

    /// A fetched page could not be turned into indexable text.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid assistant configuration.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error (reading pages from disk, config files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for site-assistant results.
pub type Result<T> = std::result::Result<T, AssistantError>;
