//! Shared helpers for `numwin-app` integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use numwin_core::NumberSource;
use numwin_domain::{Category, Config, Endpoint, UpstreamError};
use numwin_lib::{router, AppContext};
use parking_lot::Mutex;
use tower::ServiceExt;

/// Number source that replays queued responses per category.
#[derive(Default)]
pub struct FakeSource {
    responses: Mutex<HashMap<Category, VecDeque<Result<Vec<i64>, UpstreamError>>>>,
    calls: AtomicUsize,
}

impl FakeSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_batch(&self, category: Category, numbers: Vec<i64>) {
        self.responses.lock().entry(category).or_default().push_back(Ok(numbers));
    }

    pub fn push_failure(&self, category: Category, error: UpstreamError) {
        self.responses.lock().entry(category).or_default().push_back(Err(error));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NumberSource for FakeSource {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<Vec<i64>, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .get_mut(&endpoint.category)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(UpstreamError::Connect("no scripted response".into())))
    }
}

/// Context wired to `source` with default configuration.
pub fn test_context(source: Arc<FakeSource>) -> Arc<AppContext> {
    Arc::new(AppContext::with_source(Config::default(), source))
}

/// Issue a GET against the router and decode the JSON body.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("router response");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body bytes");
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    (status, body)
}

/// Router for `ctx`.
pub fn app(ctx: &Arc<AppContext>) -> Router {
    router(ctx.clone())
}
