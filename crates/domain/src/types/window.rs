//! Window report types exchanged with HTTP callers and upstream sources.

use serde::{Deserialize, Serialize};

/// Result of one fetch-and-merge request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowReport {
    /// Window contents before this request's batch was merged.
    #[serde(rename = "windowPrevState")]
    pub previous: Vec<i64>,
    /// Window contents after the merge.
    #[serde(rename = "windowCurrState")]
    pub current: Vec<i64>,
    /// Raw batch returned by the upstream source.
    pub numbers: Vec<i64>,
    /// Mean of `current`, `0.0` when empty.
    #[serde(rename = "avg")]
    pub average: f64,
}

/// Body returned by an upstream number source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamBatch {
    pub numbers: Vec<i64>,
}
