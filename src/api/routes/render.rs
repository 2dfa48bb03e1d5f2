//! Render Routes
//!
//! - POST /api/v1/render - Charts for the selected row

use axum::Json;

use crate::api::dto::{RenderRequest, RenderResponse};
use crate::api::error::ApiResult;
use crate::api::routes::uploads::validate_uploads;
use crate::dashboard::render_selection;

/// POST /api/v1/render
///
/// One chart per readable upload. Per-upload render failures are returned
/// in the chart's `error` field with a 200 status.
pub async fn render_charts(Json(req): Json<RenderRequest>) -> ApiResult<Json<RenderResponse>> {
    validate_uploads(&req.uploads)?;

    let selected_row = req.selected_row;
    let charts =
        tokio::task::spawn_blocking(move || render_selection(selected_row, &req.uploads)).await?;

    tracing::info!(
        row = ?selected_row,
        charts = charts.len(),
        failed = charts.iter().filter(|c| !c.is_ok()).count(),
        "Rendered selection"
    );

    Ok(Json(RenderResponse { charts }))
}
