use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use htmldrop_core::constants::UPLOAD_CONTENT_TYPE;
use htmldrop_core::models::UploadResponse;
use htmldrop_core::AppError;

use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::upload::{generate_storage_key, is_html_filename, sanitize_filename};

/// Upload intake handler for `POST /api/web`.
///
/// Single linear pipeline with two early exits and one wrapped fallible write:
/// find the `file` field (400 if absent), check the `.html` suffix before any
/// bytes are read (400 on mismatch), derive a `{uuid}-{name}` storage key, and
/// delegate the bytes to the storage backend (500 on any failure, cause logged
/// but not disclosed). On success the response carries the backend's locator.
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_web_page"))]
pub async fn upload_web_page(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let mut uploaded: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Upload(format!("Failed to read multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        // Suffix check happens before the field body is consumed.
        let filename = field.file_name().unwrap_or_default().to_string();
        if !is_html_filename(&filename) {
            return Err(AppError::InvalidFileType.into());
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Upload(format!("Failed to read file data: {}", e)))?;

        uploaded = Some((filename, data.to_vec()));
        break;
    }

    let (filename, data) = uploaded.ok_or(AppError::MissingFile)?;

    let safe_filename = sanitize_filename(&filename);
    let storage_key = generate_storage_key(&safe_filename);
    let size = data.len();

    let link = state
        .storage
        .store(&storage_key, data, UPLOAD_CONTENT_TYPE)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, key = %storage_key, "Failed to store uploaded page");
            AppError::Upload(format!("Failed to store uploaded page: {}", e))
        })?;

    tracing::info!(
        key = %storage_key,
        original_filename = %safe_filename,
        size_bytes = size,
        link = %link,
        "Page upload successful"
    );

    Ok(Json(UploadResponse { link }))
}
