//! HTTP listener
//!
//! Binds `0.0.0.0:<SERVER_PORT>` and serves until Ctrl+C or SIGTERM. In-flight requests
//! are drained before `start_server` returns.

use anyhow::{Context, Result};
use axum::Router;
use navsite_core::Config;
use tokio::net::TcpListener;

pub async fn start_server(config: &Config, app: Router) -> Result<()> {
    let addr = format!("0.0.0.0:{}", config.server_port());
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(
        addr = %addr,
        upload_dir = %config.upload_dir().display(),
        cors_origins = %config.cors_origins().join(","),
        "navsite listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown())
        .await
        .context("Server terminated with an error")?;

    tracing::info!("navsite stopped");
    Ok(())
}

/// Resolves on the first shutdown signal.
async fn wait_for_shutdown() {
    #[cfg(unix)]
    let mut sigterm = {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(stream) => Some(stream),
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable, only Ctrl+C stops the server");
                None
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match sigterm.as_mut() {
            Some(stream) => {
                stream.recv().await;
            }
            None => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::warn!(error = %e, "Ctrl+C listener failed, shutting down");
            }
            tracing::info!(signal = "SIGINT", "Shutdown requested");
        }
        _ = terminate => {
            tracing::info!(signal = "SIGTERM", "Shutdown requested");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn start_server_reports_port_in_use() {
        let holder = TcpListener::bind("0.0.0.0:0").await.unwrap();
        let config = Config {
            server_port: holder.local_addr().unwrap().port(),
            ..Config::default()
        };

        let err = start_server(&config, Router::new()).await.unwrap_err();
        assert!(err.to_string().starts_with("Failed to bind"), "{err}");
    }
}
