//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from main.rs
//! so integration tests can build the same router.

pub mod database;
pub mod routes;
pub mod server;
pub mod storage;
pub mod validation;

use crate::state::AppState;
use crate::telemetry::LogFormat;
use anyhow::{Context, Result};
use navsite_core::Config;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    let log_format: LogFormat = config.log_format().parse()?;
    crate::telemetry::init_telemetry(log_format)?;

    // Fail fast on misconfiguration
    validation::validate_config(&config).context("Configuration validation failed")?;

    tracing::info!(
        environment = %config.environment(),
        "Configuration loaded and validated successfully"
    );

    let pool = database::setup_database(&config).await?;
    let storage = storage::setup_storage(&config).await?;

    let state = Arc::new(AppState::new(pool, storage));

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
