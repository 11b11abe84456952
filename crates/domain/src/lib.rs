//! # numwin Domain
//!
//! Business domain types and models for the number window service.
//!
//! This crate contains:
//! - Category selectors and the upstream category table
//! - Window reports returned to callers
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other numwin crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
