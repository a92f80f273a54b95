//! Navsite Storage Library
//!
//! Upload storage for SVG logos. The `UploadStorage` trait decides where an upload
//! lands (`destination`) and streams it there; `LocalSvgStorage` writes into
//! `<upload_dir>/svg` and exposes files under `/uploads/svg/`.
//!
//! # Filename format
//!
//! `<unix-millis>-<sanitized base name>.svg`. The declared extension is dropped and
//! `.svg` is always appended. Stored names never contain `/` or `..`.

pub(crate) mod keys;
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use local::LocalSvgStorage;
pub use traits::{Destination, StorageError, StorageResult, StoredFile, UploadSink, UploadStorage};
