use anyhow::Result;
use clap::Parser;
use metrics_exporter_prometheus::PrometheusHandle;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, warn};

use spamguard_server::cli::Cli;
use spamguard_server::config::ServerConfig;
use spamguard_server::routes::create_router;
use spamguard_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose);

    info!("Starting SpamGuard Server");

    // Load configuration
    let config = ServerConfig::load(&cli.config, &cli)?;
    info!("Configuration loaded successfully");
    info!("Classify provider: {}", config.provider);
    info!("Gateway model: {}", config.gateway.model);

    // Initialize metrics
    let metrics_handle = init_metrics()?;

    // Initialize application state (build providers from configuration)
    let state = AppState::new(config, metrics_handle);

    let addr: SocketAddr = format!("{}:{}", cli.listen, cli.port).parse()?;

    // Build and run the server with graceful shutdown
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    // Graceful shutdown handler
    let shutdown = async {
        shutdown_signal().await;
        warn!("Shutdown signal received, stopping server...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Listen for shutdown signals (SIGTERM, SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Initialize tracing/logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("spamguard_server=debug,spamguard_providers=debug,tower_http=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("spamguard_server=info,spamguard_providers=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Initialize metrics exporter and return handle for rendering
fn init_metrics() -> Result<PrometheusHandle> {
    use metrics_exporter_prometheus::PrometheusBuilder;

    let builder = PrometheusBuilder::new();
    let handle = builder
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    // Initialize baseline metrics
    metrics::describe_counter!(
        "spamguard_requests_total",
        "Total number of analyze requests by action"
    );
    metrics::describe_counter!(
        "spamguard_errors_total",
        "Total number of failed requests by error kind"
    );
    metrics::describe_histogram!(
        "spamguard_provider_latency_ms",
        metrics::Unit::Milliseconds,
        "Provider round-trip latency in milliseconds by action"
    );

    info!("Metrics exporter initialized");
    Ok(handle)
}
