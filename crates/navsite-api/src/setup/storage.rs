//! Storage setup and initialization

use anyhow::{Context, Result};
use navsite_core::Config;
use navsite_storage::{LocalSvgStorage, UploadStorage};
use std::sync::Arc;

/// Create the SVG upload directory and the storage backend writing into it
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn UploadStorage>> {
    let storage = LocalSvgStorage::new(config.upload_dir())
        .await
        .context("Failed to initialize upload storage")?;

    tracing::info!(
        path = %storage.base_path().display(),
        "Upload storage initialized"
    );

    Ok(Arc::new(storage))
}
