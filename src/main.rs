mod api;
mod app_state;
mod config;
mod core;
mod domain;
mod errors;
mod routes;

use anyhow::{Context, Result};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ViewerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ViewerConfig::from_env().context("Failed to load configuration")?;
    let _guard = init_tracing(&config);

    info!(
        dir = %config.log_dir.display(),
        pattern = %config.file_pattern,
        max_message_length = config.max_message_length,
        unknown_level = ?config.unknown_level,
        "Starting log viewer v{}",
        env!("CARGO_PKG_VERSION")
    );

    let state = app_state::build_app_state(&config)?;
    let app = routes::app_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;
    info!("Listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down gracefully");
    Ok(())
}

/// Console output always; a daily-rolling file as well when a trace dir is set.
fn init_tracing(config: &ViewerConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console = fmt::layer().with_target(true);

    match &config.trace_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "logviewer.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry().with(filter).with(console).init();
            None
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
    }
}
