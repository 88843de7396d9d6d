//! sample-app server
//!
//! - `GET /`        : simulated work, records latency + request count
//! - `GET /healthz` : liveness
//! - `GET /metrics` : Prometheus scrape endpoint

use std::process::ExitCode;

use sample_app_core::error::Result;
use tracing_subscriber::{fmt, EnvFilter};

use sample_app_server::{app_state::AppState, config, router};

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, "sample-app-server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cfg = config::load()?;
    let listen = cfg.listen_addr()?;

    let state = AppState::new(cfg)?;
    let app = router::build_router(state);

    tracing::info!(%listen, "sample-app-server starting");
    let listener = tokio::net::TcpListener::bind(listen).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("sample-app-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
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

    tracing::info!("shutdown signal received");
}
