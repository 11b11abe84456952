//! Application context - dependency injection container

use std::sync::Arc;

use numwin_core::{NumberSource, NumbersService, WindowStore};
use numwin_domain::{CategoryTable, Config, Result};
use numwin_infra::HttpNumberSource;
use tracing::info;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub store: Arc<WindowStore>,
    pub numbers: Arc<NumbersService>,
}

impl AppContext {
    /// Build the context with the HTTP upstream source.
    ///
    /// # Errors
    /// Returns `NumWinError::Config` when the configuration is out of range,
    /// upstream credentials are missing or the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let source: Arc<dyn NumberSource> = Arc::new(HttpNumberSource::new(&config.upstream)?);
        Ok(Self::with_source(config, source))
    }

    /// Build the context around an arbitrary number source.
    pub fn with_source(config: Config, source: Arc<dyn NumberSource>) -> Self {
        let store = Arc::new(WindowStore::with_capacity(config.window.capacity));
        let table = CategoryTable::from_base_url(&config.upstream.base_url);

        info!(
            base_url = %config.upstream.base_url,
            timeout_ms = config.upstream.timeout_ms,
            window_capacity = store.capacity(),
            categories = table.len(),
            "application context initialised"
        );

        let numbers = Arc::new(NumbersService::new(table, source, store.clone()));

        Self { config, store, numbers }
    }
}

#[cfg(test)]
mod tests {
    use numwin_domain::NumWinError;

    use super::*;

    fn config_with_token() -> Config {
        let mut config = Config::default();
        config.upstream.access_token = Some("token".into());
        config
    }

    #[test]
    fn builds_with_configured_capacity() {
        let mut config = config_with_token();
        config.window.capacity = 25;

        let ctx = AppContext::new(config).expect("context");

        assert_eq!(ctx.store.capacity(), 25);
        assert!(ctx.store.is_empty());
    }

    #[test]
    fn rejects_oversized_window_before_allocating() {
        let mut config = config_with_token();
        config.window.capacity = usize::MAX;

        let err = AppContext::new(config).err().expect("config error");

        assert!(matches!(err, NumWinError::Config(_)));
    }
}
