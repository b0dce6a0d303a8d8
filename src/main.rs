use api_rest::{AppState, RestConfig};
use api_shared::HealthService;
use cui_core::CuiService;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the CUI service
///
/// Loads `.env`, configures logging and serves the REST API:
/// `/generate`, `/validate`, `/check-digits`, `/health` and Swagger UI at `/swagger-ui`.
///
/// # Environment Variables
/// - `CUI_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `PORT`: Port to bind on all interfaces, used when `CUI_REST_ADDR` is unset
/// - `RUST_LOG`: Extra tracing filter directives
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, binding or serving fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cui_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = RestConfig::from_env()?;
    tracing::info!("++ Starting CUI REST on {}", cfg.addr());

    let state = AppState::new(CuiService::new(), HealthService::new());
    api_rest::serve(cfg, state).await?;

    Ok(())
}
