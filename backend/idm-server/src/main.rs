use idm_config::{Config, PortFileInfo};
use idm_server::{AppState, ShutdownCoordinator, build_router, logger};

use std::error::Error;
use std::time::Duration;

use log::{error, info, warn};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path = match config.logging.file {
        Some(ref filename) => {
            let log_dir = config.log_dir()?;
            std::fs::create_dir_all(&log_dir)?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting idm-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Install the Prometheus recorder before any metric is touched
    let metrics_handle = match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!("Metrics exporter not installed: {}", e);
            None
        }
    };

    let app_state = AppState::from_config(&config, metrics_handle).await?;
    let shutdown = app_state.shutdown.clone();
    let database = app_state.database.clone();

    spawn_housekeeping(&app_state, config.rate_limit.window_secs);

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Write port discovery file for CLI auto-discovery
    match PortFileInfo::write(actual_addr.port(), &config.server.host) {
        Ok(path) => info!("Port file written: {}", path.display()),
        Err(e) => warn!(
            "Failed to write port file (CLI auto-discovery may not work): {}",
            e
        ),
    }

    spawn_signal_handler(shutdown.clone());

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.subscribe_guard().wait().await;
            info!("Graceful shutdown complete");
        })
        .await?;

    if let Some(database) = database {
        if let Err(e) = database.checkpoint().await {
            warn!("Final checkpoint failed: {}", e);
        }
        database.close().await;
        info!("Database closed");
    }

    // Clean up port discovery file
    if let Err(e) = PortFileInfo::remove() {
        warn!("Failed to remove port file: {}", e);
    }

    Ok(())
}

/// Trigger shutdown on Ctrl+C
fn spawn_signal_handler(shutdown: ShutdownCoordinator) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });
}

/// Periodically drop idle rate-limiter keys and run exporter upkeep
fn spawn_housekeeping(state: &AppState, window_secs: u64) {
    let rate_limiter = state.rate_limiter.clone();
    let metrics_handle = state.metrics_handle.clone();
    let mut guard = state.shutdown.subscribe_guard();
    let period = Duration::from_secs(window_secs.max(1));

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    rate_limiter.purge_idle();
                    if let Some(ref handle) = metrics_handle {
                        handle.run_upkeep();
                    }
                }
                _ = guard.wait() => break,
            }
        }
    });
}
