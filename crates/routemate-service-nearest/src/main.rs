//! routemate nearest-airport service entry point.
//!
//! # Configuration
//!
//! - `ROUTEMATE_AIRPORTS_PATH` - Path to the airports CSV (default: platform data dir)
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `LOG_FORMAT` - `json` (default) or `text`
//! - `RUST_LOG` - Log level (default: info)
//! - `METRICS_ENABLED` / `METRICS_PATH` - Prometheus endpoint toggle and path
//!
//! The listener opens before the catalog is loaded. Queries made while the
//! catalog loads receive 503 with `Retry-After`.

use std::net::SocketAddr;

use tracing::{error, info, warn};

use routemate_service_nearest::{router, ServiceConfig};
use routemate_service_shared::{init_logging, init_metrics, AppState, LoggingConfig, MetricsError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service("nearest");
    init_logging(&logging_config);

    let config = ServiceConfig::from_env();
    match init_metrics(&config.metrics) {
        Ok(()) => info!(path = %config.metrics.path, "metrics enabled"),
        Err(MetricsError::Disabled) => info!("metrics disabled"),
        // Log but don't fail - metrics are optional
        Err(e) => warn!(error = %e, "failed to initialize metrics, continuing without metrics"),
    }

    let state = AppState::new();
    let app = router(state.clone(), &config.metrics);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %addr, "listening on");

    match config.dataset_path() {
        Ok(path) => {
            info!(path = %path.display(), "starting airport catalog load");
            let load = state.spawn_airport_load(path);
            tokio::spawn(async move {
                if let Err(e) = load.await {
                    error!(error = %e, "airport catalog load task panicked");
                }
            });
        }
        Err(e) => {
            error!(error = %e, "cannot resolve airport dataset location");
            state.fail_airports(e);
        }
    }

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("shutdown complete");
    Ok(())
}

/// Resolve on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
