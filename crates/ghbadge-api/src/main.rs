//! ghbadge API server
//!
//! Serves badge JSON for GitHub-backed services.

use ghbadge_api::{bootstrap, routes};
use ghbadge_config::ApplicationConfig;
use tracing::{info, warn};

type MainResult = Result<(), Box<dyn std::error::Error>>;

#[tokio::main]
async fn main() -> MainResult {
    // Initialize environment (load .env, etc.)
    ghbadge_common::initialize_environment();

    let config = ApplicationConfig::load()?;

    ghbadge_common::init_tracing(&config.telemetry.tracing_level, config.telemetry.json_logs)?;

    info!(
        service = %config.telemetry.service_name,
        version = env!("CARGO_PKG_VERSION"),
        "Starting ghbadge API server..."
    );
    info!("Configuration loaded: {:?}", config);

    let state = bootstrap::initialize_app_state(&config)?;
    let app = routes::create_router(state, &config.api);

    let addr = config.api.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, docs = config.api.enable_docs, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal; running until killed");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
