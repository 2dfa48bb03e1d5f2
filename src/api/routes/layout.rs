//! Layout Routes
//!
//! - GET /api/v1/layout?n_clicks=N - Sidebar and content pane styles

use axum::{extract::Query, Json};

use crate::api::dto::LayoutParams;
use crate::dashboard::SidebarLayout;

/// GET /api/v1/layout
pub async fn sidebar_layout(Query(params): Query<LayoutParams>) -> Json<SidebarLayout> {
    Json(SidebarLayout::for_clicks(params.n_clicks))
}
