//! Upload response models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A logo that was written to the upload directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UploadedFile {
    /// Generated file name, e.g. `1718000000000-github.svg`
    pub filename: String,
    /// Public path to use as a navigation site's `logo`
    pub path: String,
    /// Size in bytes
    pub size: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    pub message: String,
    pub file: UploadedFile,
}
