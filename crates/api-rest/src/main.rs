//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own, without loading `.env`.
//!
//! ## Intended use
//! Useful during development when the environment is already set. The workspace's main `cui-run`
//! binary also loads `.env` before serving the same router.

use api_rest::{AppState, RestConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the CUI REST API server
///
/// # Environment Variables
/// - `CUI_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `PORT`: Port to bind on all interfaces, used when `CUI_REST_ADDR` is unset
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configured address is invalid or cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = RestConfig::from_env()?;
    tracing::info!("-- Starting CUI REST API on {}", cfg.addr());

    api_rest::serve(cfg, AppState::default()).await?;

    Ok(())
}
