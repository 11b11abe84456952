//! Sliding window of unique integers.
//!
//! [`Window`] holds the ordering and deduplication rules; [`WindowStore`]
//! wraps it in a mutex so request handlers can share a single instance.

pub mod buffer;
pub mod store;

pub use buffer::Window;
pub use store::{WindowStore, WindowTransition};
