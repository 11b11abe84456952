//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! service.

// Window configuration
pub const WINDOW_CAPACITY: usize = 10;
pub const MAX_WINDOW_CAPACITY: usize = 10_000;

// Upstream configuration
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "http://20.244.56.144/evaluation-service";
pub const UPSTREAM_TIMEOUT_MS: u64 = 500;

// Server configuration
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 9876;

// Client-facing error messages
pub const INVALID_SELECTOR_MESSAGE: &str = "Invalid number ID";
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to fetch numbers";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
