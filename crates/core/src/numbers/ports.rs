//! Port interfaces for upstream number sources
//!
//! These traits define the boundary between the fetch-and-merge logic and
//! the HTTP implementation in `numwin-infra`.

use async_trait::async_trait;
use numwin_domain::{Endpoint, UpstreamError};

/// Trait for retrieving a batch of integers from an upstream source
#[async_trait]
pub trait NumberSource: Send + Sync {
    /// Fetch one batch from `endpoint`.
    ///
    /// Implementations make exactly one attempt and bound it by their own
    /// timeout. Any failure means nothing should be merged.
    async fn fetch(&self, endpoint: &Endpoint) -> Result<Vec<i64>, UpstreamError>;
}
