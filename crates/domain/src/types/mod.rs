//! Domain types and models

pub mod category;
pub mod window;

pub use category::{Category, CategoryTable, Endpoint};
pub use window::{UpstreamBatch, WindowReport};
