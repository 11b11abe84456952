//! # numwin Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP client with a single bounded attempt per request
//! - Upstream number source implementation (reqwest)
//! - Configuration loading from environment and files
//!
//! ## Architecture
//! - Implements traits defined in `numwin-core`
//! - Depends on `numwin-domain` and `numwin-core`
//! - Contains all "impure" code (network and filesystem I/O)

pub mod config;
pub mod errors;
pub mod http;
pub mod numbers;

// Re-export commonly used items
pub use errors::IntoUpstreamError;
pub use http::{HttpClient, HttpClientBuilder};
pub use numbers::HttpNumberSource;
