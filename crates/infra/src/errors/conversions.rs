//! Conversions from external infrastructure errors into domain errors.

use std::time::Duration;

use numwin_domain::UpstreamError;
use reqwest::Error as HttpError;

/// Extension trait that classifies transport errors as upstream failures.
///
/// `timeout` is the limit the caller enforced, reported back on timeouts.
pub trait IntoUpstreamError {
    fn into_upstream(self, timeout: Duration) -> UpstreamError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → UpstreamError */
/* -------------------------------------------------------------------------- */

impl IntoUpstreamError for HttpError {
    fn into_upstream(self, timeout: Duration) -> UpstreamError {
        if self.is_timeout() {
            return UpstreamError::Timeout(timeout);
        }

        if self.is_builder() {
            return UpstreamError::Request(self.to_string());
        }

        if let Some(status) = self.status() {
            return UpstreamError::Status(status.as_u16());
        }

        if self.is_decode() {
            return UpstreamError::Decode(self.to_string());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return UpstreamError::Connect(format!("HTTP connection failure: {self}"));
        }

        UpstreamError::Connect(self.to_string())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
