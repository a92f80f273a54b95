//! SVG logo upload handler
//!
//! Accepts a single multipart field named `file`. The declared content type is checked
//! before anything is written; size and content are checked while and after the file is
//! streamed to storage, and a rejected file is removed again.

use axum::{
    extract::{
        multipart::{Field, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::constants::{NO_FILE_SELECTED, ONLY_SVG_ALLOWED, UPLOAD_SUCCESS};
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::UploadState;
use crate::utils::upload::{discard_upload, ensure_svg_content, multipart_error, stream_field};
use navsite_core::models::{UploadResponse, UploadedFile};
use navsite_core::validation::is_svg_content_type;
use navsite_core::AppError;
use navsite_storage::StoredFile;

/// Multipart field carrying the upload
const FILE_FIELD: &str = "file";

/// Upload an SVG logo
#[utoipa::path(
    post,
    path = "/api/navigation/upload",
    request_body(content = String, content_type = "multipart/form-data", description = "Multipart form with a single `file` field (image/svg+xml, at most 5MB)"),
    responses(
        (status = 201, description = "SVG stored", body = UploadResponse),
        (status = 400, description = "Missing file, non-SVG type, invalid SVG content or file too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "upload"
)]
#[tracing::instrument(skip(uploads, multipart))]
pub async fn upload_svg(
    State(uploads): State<UploadState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, HttpAppError> {
    let mut multipart = multipart.map_err(|rejection| {
        tracing::debug!(rejection = %rejection.body_text(), "Request is not multipart");
        AppError::BadRequest(NO_FILE_SELECTED.to_string())
    })?;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let stored = receive_svg(&uploads, field).await?;

        tracing::info!(
            filename = %stored.filename,
            size_bytes = stored.size,
            "SVG uploaded"
        );

        return Ok((
            StatusCode::CREATED,
            Json(UploadResponse {
                message: UPLOAD_SUCCESS.to_string(),
                file: UploadedFile {
                    filename: stored.filename,
                    path: stored.public_path,
                    size: stored.size,
                },
            }),
        ));
    }

    Err(AppError::BadRequest(NO_FILE_SELECTED.to_string()).into())
}

async fn receive_svg(
    uploads: &UploadState,
    mut field: Field<'_>,
) -> Result<StoredFile, HttpAppError> {
    let content_type = field.content_type().unwrap_or_default().to_string();
    if !is_svg_content_type(&content_type) {
        tracing::debug!(content_type = %content_type, "Rejected non-SVG upload");
        return Err(AppError::BadRequest(ONLY_SVG_ALLOWED.to_string()).into());
    }

    let original_filename = field.file_name().unwrap_or_default().to_string();
    let storage = uploads.storage.as_ref();

    let mut sink = storage.create(&original_filename, &content_type).await?;
    let filename = sink.destination().filename.clone();

    let result = async {
        stream_field(&mut field, sink.as_mut(), uploads.max_file_size).await?;
        let stored = sink.finish().await?;

        let data = storage.read(&stored.filename).await?;
        ensure_svg_content(&data)?;

        Ok::<_, HttpAppError>(stored)
    }
    .await;

    if result.is_err() {
        discard_upload(storage, &filename).await;
    }

    result
}
