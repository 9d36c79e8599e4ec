//! Admin dashboard route handler.

use axum::{Json, extract::State};

use crate::error::Result as AppResult;
use crate::middleware::RequireAdmin;
use crate::services::{DashboardService, dashboard::DashboardSummary};
use crate::state::AppState;

/// Aggregated store stats plus the most recent orders.
///
/// Admin only.
pub async fn summary(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DashboardSummary>> {
    let dashboard = DashboardService::new(state.pool());
    let summary = dashboard.summary().await?;
    Ok(Json(summary))
}
