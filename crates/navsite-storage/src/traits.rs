//! Storage abstraction trait
//!
//! This module defines the `UploadStorage` trait the upload handler talks to.

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid filename: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Where an upload will be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    /// Generated file name, unique within the storage directory
    pub filename: String,
    /// Public path the file is served under
    pub public_path: String,
}

/// A completely written upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub filename: String,
    pub public_path: String,
    pub size: u64,
}

/// An upload being written chunk by chunk.
///
/// Dropping a sink without calling `finish` leaves the partial file in place; callers
/// remove it with `UploadStorage::delete`.
#[async_trait]
pub trait UploadSink: Send {
    fn destination(&self) -> &Destination;

    fn bytes_written(&self) -> u64;

    async fn write_chunk(&mut self, chunk: &[u8]) -> StorageResult<()>;

    /// Flush to disk and return the stored file
    async fn finish(self: Box<Self>) -> StorageResult<StoredFile>;
}

/// Upload storage strategy
///
/// `destination` is the pure naming decision; `create` claims a destination on the
/// backing store without overwriting existing files, asking `destination` for the next
/// candidate on every attempt.
#[async_trait]
pub trait UploadStorage: Send + Sync {
    /// Compute the destination for a declared file name and content type.
    ///
    /// `attempt` counts the names already found taken for this upload.
    fn destination(
        &self,
        original_filename: &str,
        content_type: &str,
        attempt: u32,
    ) -> StorageResult<Destination>;

    /// Create a new, empty upload and return a sink to stream it into
    async fn create(
        &self,
        original_filename: &str,
        content_type: &str,
    ) -> StorageResult<Box<dyn UploadSink>>;

    /// Read a stored file back
    async fn read(&self, filename: &str) -> StorageResult<Vec<u8>>;

    /// Delete a stored file
    async fn delete(&self, filename: &str) -> StorageResult<()>;
}
