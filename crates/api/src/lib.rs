//! # numwin API
//!
//! HTTP application layer - routes, server and main entry point.
//!
//! This crate contains:
//! - axum routes (HTTP → core service bridge)
//! - Application context (dependency injection)
//! - Server startup and logging setup
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Maps domain errors onto HTTP responses

pub mod context;
pub mod routes;
pub mod server;
pub mod utils;

// Re-export for convenience
pub use context::*;
pub use routes::router;
pub use server::{serve, serve_with_listener};
