//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::dashboard::{RenderedChart, RowOption, UploadSummary};
use crate::decode::Upload;

/// Most files accepted in one request
pub const MAX_UPLOADS: usize = 16;

// ============================================
// UPLOAD DTOs
// ============================================

/// Request carrying the current uploads
#[derive(Debug, Deserialize)]
pub struct UploadsRequest {
    /// Uploaded files in selection order
    #[serde(default)]
    pub uploads: Vec<Upload>,
}

/// Preview of one upload
#[derive(Debug, Serialize)]
pub struct UploadPreview {
    pub filename: String,
    /// Whether the file could be read
    pub decoded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<UploadSummary>,
}

/// Upload preview response
#[derive(Debug, Serialize)]
pub struct UploadSummaryResponse {
    pub uploads: Vec<UploadPreview>,
}

/// Row selector options response
#[derive(Debug, Serialize)]
pub struct RowOptionsResponse {
    pub options: Vec<RowOption>,
}

// ============================================
// RENDER DTOs
// ============================================

/// Render request for the selected row
#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    /// 1-indexed row; nothing is rendered while unset
    #[serde(default)]
    pub selected_row: Option<i64>,
    #[serde(default)]
    pub uploads: Vec<Upload>,
}

/// Render response
#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub charts: Vec<RenderedChart>,
}

// ============================================
// LAYOUT DTOs
// ============================================

/// Query parameters for the layout endpoint
#[derive(Debug, Deserialize)]
pub struct LayoutParams {
    /// Number of times the sidebar toggle was clicked
    #[serde(default)]
    pub n_clicks: u64,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status
    pub status: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
