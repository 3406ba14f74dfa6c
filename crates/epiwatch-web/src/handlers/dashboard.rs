//! Dashboard aggregation API — region ranking and overview stats.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use epiwatch_common::ApiError;
use epiwatch_risk::{aggregate_regions, overview_stats, tier_chart, OverviewStats, RegionSummary, TierChart};

use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    /// Ranked by descending High-tier share, then volume
    pub regions: Vec<RegionSummary>,
    pub chart: TierChart,
}

/// GET /api/dashboard/regions — per-region risk rollup for the caller.
pub async fn api_dashboard_regions(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> Result<Json<DashboardResponse>, ApiError> {
    let user_id = super::user_from_headers(&headers)?;
    let records = state.store.records_for_user(user_id).await?;
    Ok(Json(DashboardResponse {
        regions: aggregate_regions(&records),
        chart: tier_chart(&records),
    }))
}

/// GET /api/overview — headline counts for the caller's history.
pub async fn api_overview(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> Result<Json<OverviewStats>, ApiError> {
    let user_id = super::user_from_headers(&headers)?;
    let records = state.store.records_for_user(user_id).await?;
    Ok(Json(overview_stats(&records)))
}
