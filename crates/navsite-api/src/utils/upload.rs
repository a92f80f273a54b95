//! Common utilities for the SVG upload handler

use axum::extract::multipart::{Field, MultipartError};
use axum::http::StatusCode;
use navsite_core::validation::has_svg_signature;
use navsite_core::AppError;
use navsite_storage::{UploadSink, UploadStorage};

use crate::constants::{FILE_TOO_LARGE, INVALID_MULTIPART, INVALID_SVG_FILE};
use crate::error::HttpAppError;

/// Map a multipart read failure to a 400. Body-limit overruns report the size cap.
pub fn multipart_error(err: MultipartError) -> HttpAppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::debug!(error = %err, "Upload exceeded body limit");
        return AppError::BadRequest(FILE_TOO_LARGE.to_string()).into();
    }
    tracing::debug!(error = %err, "Failed to read multipart body");
    AppError::BadRequest(INVALID_MULTIPART.to_string()).into()
}

/// Reject a write that would push the upload past `max_size` bytes.
pub fn check_upload_size(written: u64, chunk_len: usize, max_size: usize) -> Result<(), AppError> {
    if written + chunk_len as u64 > max_size as u64 {
        return Err(AppError::BadRequest(FILE_TOO_LARGE.to_string()));
    }
    Ok(())
}

/// Stream a multipart field into `sink`, counting bytes against `max_size`.
pub async fn stream_field(
    field: &mut Field<'_>,
    sink: &mut dyn UploadSink,
    max_size: usize,
) -> Result<(), HttpAppError> {
    while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
        check_upload_size(sink.bytes_written(), chunk.len(), max_size)?;
        sink.write_chunk(&chunk).await?;
    }
    Ok(())
}

/// Check that the stored bytes, read as text, are bounded by `<svg` ... `</svg>`.
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn ensure_svg_content(data: &[u8]) -> Result<(), AppError> {
    if has_svg_signature(&String::from_utf8_lossy(data)) {
        return Ok(());
    }
    Err(AppError::BadRequest(INVALID_SVG_FILE.to_string()))
}

/// Best-effort removal of a rejected or partial upload. Failures are only logged.
pub async fn discard_upload(storage: &dyn UploadStorage, filename: &str) {
    match storage.delete(filename).await {
        Ok(()) => tracing::debug!(filename, "Discarded rejected upload"),
        Err(e) => tracing::warn!(filename, error = %e, "Failed to remove rejected upload"),
    }
}
