//! Serves stored artifacts by storage key. This is what makes the local
//! backend's root-relative locators (`/uploads/<key>`) dereferenceable.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use htmldrop_core::constants::UPLOAD_CONTENT_TYPE;
use htmldrop_core::AppError;

use crate::error::HttpAppError;
use crate::state::AppState;

/// `GET /uploads/{key}` - fetch a stored page. Artifacts are immutable once
/// written, so the response is cacheable indefinitely.
#[tracing::instrument(skip(state), fields(operation = "get_uploaded_file"))]
pub async fn get_uploaded_file(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Response, HttpAppError> {
    let data = state.storage.retrieve(&key).await?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, UPLOAD_CONTENT_TYPE)
        .header(header::CACHE_CONTROL, "public, max-age=31536000, immutable")
        .body(Body::from(data))
        .map_err(|e| {
            tracing::error!(error = %e, key = %key, "Failed to build response");
            HttpAppError::from(AppError::Internal(e.to_string()))
        })?;

    Ok(response)
}
