//! System status API — model availability and directory coverage.

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use epiwatch_common::ApiError;

use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct ModelStatus {
    pub available: bool,
    pub family: Option<&'static str>,
    pub version: Option<String>,
    pub trained_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct DirectoryStatus {
    pub aqi_regions: usize,
    pub facility_regions: usize,
}

#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub model: ModelStatus,
    pub directory: DirectoryStatus,
}

/// GET /api/system/status
pub async fn api_system_status(
    State(state): State<SharedState>,
) -> Result<Json<SystemStatus>, ApiError> {
    let model = match &state.model {
        Some(model) => ModelStatus {
            available: true,
            family: Some(model.family),
            version: Some(model.version.clone()),
            trained_at: model.trained_at,
        },
        None => ModelStatus {
            available: false,
            family: None,
            version: None,
            trained_at: None,
        },
    };
    Ok(Json(SystemStatus {
        model,
        directory: DirectoryStatus {
            aqi_regions: state.directory.aqi_region_count(),
            facility_regions: state.directory.facility_region_count(),
        },
    }))
}
