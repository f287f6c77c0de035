//! Unified error types for slipway
//!
//! This module defines error types for each layer:
//! - `HostError`: repository-host API client errors
//! - `RepoError`: local repository command errors
//! - `AppError`: application layer errors (wraps the others for the CLI)

use thiserror::Error;

/// Repository-host API client errors
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized - check provider credentials")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// Local repository command errors
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not a git or hg checkout: {0}")]
    NotARepository(String),

    #[error("No remote origin configured")]
    OriginNotConfigured,

    #[error("{command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("Failed to execute {command}: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
}

/// Application layer errors - used by the CLI commands
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Host error: {0}")]
    Host(#[from] HostError),

    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),

    #[error("No adapter for origin: {0}")]
    UnsupportedOrigin(String),

    #[error("Missing {provider} credentials: set {vars}")]
    MissingCredentials { provider: String, vars: String },

    #[error("Invalid version label: {0}")]
    InvalidVersion(String),
}
