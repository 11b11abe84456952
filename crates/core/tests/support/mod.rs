//! Shared test helpers for `numwin-core` integration tests.
//!
//! These helpers provide a scripted upstream source so that service tests
//! can focus on window behaviour instead of network plumbing.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use numwin_core::NumberSource;
use numwin_domain::{Category, Endpoint, UpstreamError};
use parking_lot::Mutex;

/// Upstream source that replays queued responses per category.
#[derive(Default)]
pub struct ScriptedSource {
    responses: Mutex<HashMap<Category, VecDeque<Result<Vec<i64>, UpstreamError>>>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful batch for `category`.
    pub fn with_batch(self, category: Category, numbers: Vec<i64>) -> Self {
        self.push(category, Ok(numbers));
        self
    }

    /// Queue a failure for `category`.
    pub fn with_failure(self, category: Category, error: UpstreamError) -> Self {
        self.push(category, Err(error));
        self
    }

    pub fn push(&self, category: Category, response: Result<Vec<i64>, UpstreamError>) {
        self.responses.lock().entry(category).or_default().push_back(response);
    }

    /// Number of fetches observed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NumberSource for ScriptedSource {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<Vec<i64>, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .get_mut(&endpoint.category)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(UpstreamError::Connect("no scripted response".into())))
    }
}
