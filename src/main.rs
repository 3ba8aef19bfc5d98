use habitsim::api::{self, app_state::AppState};
use habitsim::config::loader::ConfigLoader;
use habitsim::observability::{AppMetrics, ObservabilityState, create_observability_router, init_tracing};
use habitsim::services::create_session_service;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::load()?;

    let _log_guard = init_tracing(&config.app_name, &config.logging)
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {}", e))?;

    info!("Starting Habitsim ({})...", config.environment);
    info!("Configuration loaded successfully");

    let metrics = Arc::new(AppMetrics::default());
    let app_state = AppState::new(create_session_service(), metrics.clone());
    info!("Session service initialized");

    let observability_state = Arc::new(ObservabilityState::new(
        env!("CARGO_PKG_VERSION").to_string(),
        metrics,
    ));
    let router = create_observability_router(observability_state).merge(api::create_router(app_state, &config.server));
    info!("API router created with observability endpoints");

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped, session histories discarded");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
