//! # numwin Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The bounded, deduplicated number window and its thread-safe store
//! - Port interfaces (traits) for upstream number sources
//! - The fetch-and-merge use case
//!
//! ## Architecture Principles
//! - Only depends on `numwin-domain`
//! - No HTTP, filesystem, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod numbers;
pub mod window;

pub use numbers::ports::NumberSource;
pub use numbers::NumbersService;
pub use window::{Window, WindowStore, WindowTransition};
