//! Recent assessment record queries.

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;

use epiwatch_common::{ApiError, AssessmentRecord};

use crate::state::SharedState;

const DEFAULT_LIMIT: usize = 5;
const MAX_LIMIT: usize = 100;

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<usize>,
}

/// GET /api/assessments/recent — newest records first.
pub async fn api_recent_assessments(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(query): Query<RecentQuery>,
) -> Result<Json<Vec<AssessmentRecord>>, ApiError> {
    let user_id = super::user_from_headers(&headers)?;
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    let records = state.store.recent_for_user(user_id, limit).await?;
    Ok(Json(records))
}
