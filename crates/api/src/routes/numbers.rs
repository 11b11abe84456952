//! Number window route handler

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Path, State};
use axum::Json;
use numwin_domain::WindowReport;

use super::response::ApiError;
use crate::context::AppContext;
use crate::utils::logging::log_request_outcome;

/// `GET /numbers/{selector}`
///
/// Fetches one batch for `selector`, merges it into the shared window and
/// returns the window before and after along with the new mean.
pub async fn get_numbers(
    State(ctx): State<Arc<AppContext>>,
    Path(selector): Path<String>,
) -> Result<Json<WindowReport>, ApiError> {
    let start = Instant::now();

    let result = ctx.numbers.fetch_and_merge(&selector).await;
    log_request_outcome(&selector, start.elapsed(), result.as_ref().err());

    result.map(Json).map_err(ApiError::from)
}
