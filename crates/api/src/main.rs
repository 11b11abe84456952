//! numwin - sliding number window service
//!
//! Main entry point for the HTTP server.

use std::sync::Arc;

use anyhow::Context;
use numwin_lib::utils::logging::init_tracing;
use numwin_lib::{serve, AppContext};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before logging so RUST_LOG from the file takes effect
    let dotenv = dotenvy::dotenv();
    init_tracing()?;

    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(e) => debug!(error = %e, "No .env file loaded"),
    }

    let config = numwin_infra::config::load().context("failed to load configuration")?;
    let ctx = Arc::new(AppContext::new(config).context("failed to initialise application context")?);

    serve(ctx).await
}
