//! Number window service - core business logic

use std::sync::Arc;

use numwin_domain::{CategoryTable, NumWinError, Result, WindowReport};
use tracing::{debug, instrument, warn};

use super::ports::NumberSource;
use crate::window::WindowStore;

/// Validates selectors, fetches upstream batches and merges them into the
/// shared window.
pub struct NumbersService {
    table: CategoryTable,
    source: Arc<dyn NumberSource>,
    store: Arc<WindowStore>,
}

impl NumbersService {
    /// Create a new numbers service
    pub fn new(
        table: CategoryTable,
        source: Arc<dyn NumberSource>,
        store: Arc<WindowStore>,
    ) -> Self {
        Self { table, source, store }
    }

    /// Window store this service merges into.
    pub fn store(&self) -> &Arc<WindowStore> {
        &self.store
    }

    /// Resolve `selector`, fetch one batch and merge it.
    ///
    /// # Errors
    /// - [`NumWinError::InvalidSelector`] when the selector is not in the
    ///   category table. No upstream call is made.
    /// - [`NumWinError::Upstream`] when the fetch fails or times out. The
    ///   window is left untouched.
    #[instrument(skip(self))]
    pub async fn fetch_and_merge(&self, selector: &str) -> Result<WindowReport> {
        let endpoint = self
            .table
            .resolve(selector)
            .ok_or_else(|| NumWinError::InvalidSelector(selector.to_string()))?;

        // The store lock is only taken after the fetch completes.
        let numbers = self.source.fetch(endpoint).await.map_err(|err| {
            warn!(
                category = %endpoint.category,
                url = %endpoint.url,
                error = %err,
                "upstream fetch failed"
            );
            NumWinError::from(err)
        })?;

        let transition = self.store.apply(&numbers);
        debug!(
            category = %endpoint.category,
            fetched = numbers.len(),
            window_len = transition.current.len(),
            average = transition.average,
            "batch merged into window"
        );

        Ok(WindowReport {
            previous: transition.previous,
            current: transition.current,
            numbers,
            average: transition.average,
        })
    }
}
