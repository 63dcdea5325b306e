//! Upload endpoints: batch analysis per category
//!
//! The Upload page posts one multipart batch per run. Selection errors
//! (no files, unknown category, overlapping run) come back as HTTP
//! errors; a backend failure comes back as a 200 with a single-message
//! envelope the page renders inline, mirroring how batch results render.

use axum::{
    extract::{Multipart, Path, State},
    routing::post,
    Json, Router,
};
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::flow::UploadError;
use crate::AppState;
use archai_common::api::types::{Category, SelectedFile, UploadOutcome};

/// Multipart field name carrying the image files
const FILE_FIELD: &str = "files";

/// POST /api/analyze/:category
///
/// Accepts a multipart batch with repeated `files` parts and forwards it
/// to the inference backend as one exchange.
pub async fn analyze_batch(
    State(state): State<AppState>,
    Path(category): Path<String>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadOutcome>> {
    let category: Category = category
        .parse()
        .map_err(|e: String| ApiError::NotFound(e))?;

    let mut files = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field
            .file_name()
            .unwrap_or("upload")
            .to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read file part: {}", e)))?
            .to_vec();

        debug!(filename = %filename, size = bytes.len(), "Received file part");

        files.push(SelectedFile {
            filename,
            content_type,
            bytes,
        });
    }

    match state.upload.submit(category, files).await {
        Ok(batch) => Ok(Json(UploadOutcome::Completed(batch))),
        Err(UploadError::NoFiles) => Err(ApiError::BadRequest("No files selected".to_string())),
        Err(UploadError::Busy) => Err(ApiError::Conflict(format!(
            "A {} analysis is already running",
            category
        ))),
        Err(UploadError::Analysis(message)) => Ok(Json(UploadOutcome::Failed { error: message })),
    }
}

/// Build analyze routes
pub fn analyze_routes() -> Router<AppState> {
    Router::new().route("/api/analyze/:category", post(analyze_batch))
}
