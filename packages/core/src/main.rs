use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;
use tokio::net::TcpListener;

use livestock_health_tracker::api::{create_router, AppState};
use livestock_health_tracker::cli::Cli;
use livestock_health_tracker::config::Config;
use livestock_health_tracker::error::AppError;
use livestock_health_tracker::logging::init_logging;
use livestock_health_tracker::metrics::AppMetrics;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_logging();

    if let Err(err) = run(Cli::parse()).await {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = Config::from_env()
        .and_then(|config| config.merge_cli(&cli))
        .map_err(AppError::Config)?;

    tracing::info!("Service starting with config: {:?}", config);

    let metrics = Arc::new(
        AppMetrics::new().map_err(|err| AppError::Internal(err.to_string()))?,
    );
    let state = if config.seed_data {
        AppState::seeded(metrics)
    } else {
        AppState::empty(metrics)
    };

    let app = create_router(state, &config.api_prefix);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|err| AppError::Config(format!("Cannot bind {}: {}", addr, err)))?;

    tracing::info!("Listening on http://{}", addr);
    let prefix = if config.api_prefix.is_empty() {
        "/"
    } else {
        config.api_prefix.as_str()
    };
    tracing::info!("- API routes under: {}", prefix);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| AppError::Internal(err.to_string()))?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received. Stopping server.");
    }
}
