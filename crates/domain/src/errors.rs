//! Error types used throughout the service

use std::time::Duration;

use thiserror::Error;

/// Failure while talking to an upstream number source.
///
/// Every variant is reported to callers as "upstream unavailable"; the
/// distinction only matters for logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    #[error("upstream request timed out after {0:?}")]
    Timeout(Duration),

    #[error("upstream connection failure: {0}")]
    Connect(String),

    #[error("upstream returned HTTP {0}")]
    Status(u16),

    #[error("failed to decode upstream response: {0}")]
    Decode(String),

    #[error("failed to build upstream request: {0}")]
    Request(String),
}

/// Main error type for numwin
#[derive(Error, Debug)]
pub enum NumWinError {
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error("Upstream unavailable: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for numwin operations
pub type Result<T> = std::result::Result<T, NumWinError>;
