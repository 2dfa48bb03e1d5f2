//! Upload Routes
//!
//! Endpoints called whenever the set of uploaded files changes.
//!
//! - POST /api/v1/uploads/summary - Preview each upload
//! - POST /api/v1/rows - Row selector options

use axum::Json;

use crate::api::dto::{
    RowOptionsResponse, UploadPreview, UploadSummaryResponse, UploadsRequest, MAX_UPLOADS,
};
use crate::api::error::{ApiError, ApiResult};
use crate::dashboard::{summarize_upload, update_row_options};
use crate::decode::Upload;

/// POST /api/v1/uploads/summary
///
/// Classify every upload and report its size. Files that cannot be read
/// are listed with `decoded: false`.
pub async fn summarize_uploads(
    Json(req): Json<UploadsRequest>,
) -> ApiResult<Json<UploadSummaryResponse>> {
    validate_uploads(&req.uploads)?;

    let uploads: Vec<UploadPreview> = tokio::task::spawn_blocking(move || {
        req.uploads
            .iter()
            .map(|upload| {
                let summary = summarize_upload(upload);
                UploadPreview {
                    filename: upload.filename.clone(),
                    decoded: summary.is_some(),
                    summary,
                }
            })
            .collect()
    })
    .await?;

    Ok(Json(UploadSummaryResponse { uploads }))
}

/// POST /api/v1/rows
///
/// Options for the row selector, taken from the first upload.
pub async fn row_options(Json(req): Json<UploadsRequest>) -> ApiResult<Json<RowOptionsResponse>> {
    validate_uploads(&req.uploads)?;

    let options = tokio::task::spawn_blocking(move || update_row_options(&req.uploads)).await?;

    tracing::debug!(count = options.len(), "Row options computed");

    Ok(Json(RowOptionsResponse { options }))
}

/// Reject requests carrying more files than the dashboard accepts
pub(crate) fn validate_uploads(uploads: &[Upload]) -> ApiResult<()> {
    if uploads.len() > MAX_UPLOADS {
        return Err(ApiError::Validation(format!(
            "Too many uploads: {} (maximum {})",
            uploads.len(),
            MAX_UPLOADS
        )));
    }

    Ok(())
}
