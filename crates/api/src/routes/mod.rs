//! HTTP routes
//!
//! - `GET /numbers/{selector}` → fetch, merge and report the window

pub mod numbers;
pub mod response;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::context::AppContext;

/// Build the service router.
pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/numbers/{selector}", get(numbers::get_numbers))
        .with_state(ctx)
        .layer(TraceLayer::new_for_http())
}
