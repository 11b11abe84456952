//! Mapping from domain errors to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use numwin_domain::constants::{
    INTERNAL_ERROR_MESSAGE, INVALID_SELECTOR_MESSAGE, UPSTREAM_FAILURE_MESSAGE,
};
use numwin_domain::NumWinError;
use serde::{Deserialize, Serialize};

/// JSON body for every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Domain error carried out of a handler.
#[derive(Debug)]
pub struct ApiError(pub NumWinError);

impl From<NumWinError> for ApiError {
    fn from(value: NumWinError) -> Self {
        ApiError(value)
    }
}

impl ApiError {
    /// Status code and client-facing message for this error.
    ///
    /// Messages are fixed strings; internal details stay in the logs.
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match &self.0 {
            NumWinError::InvalidSelector(_) => (StatusCode::BAD_REQUEST, INVALID_SELECTOR_MESSAGE),
            NumWinError::Upstream(_) => (StatusCode::SERVICE_UNAVAILABLE, UPSTREAM_FAILURE_MESSAGE),
            NumWinError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, Json(ErrorBody { error: message.to_string() })).into_response()
    }
}
