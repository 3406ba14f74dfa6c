//! Axum router — maps all URL paths to handlers.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    assess::api_assess,
    dashboard::{api_dashboard_regions, api_overview},
    records::api_recent_assessments,
    system::api_system_status,
};
use crate::sse::sse_handler;
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Assessment pipeline
        .route("/api/assess", post(api_assess))

        // Reporting
        .route("/api/dashboard/regions", get(api_dashboard_regions))
        .route("/api/overview", get(api_overview))
        .route("/api/assessments/recent", get(api_recent_assessments))

        // System
        .route("/api/system/status", get(api_system_status))

        // SSE streaming
        .route("/api/events", get(sse_handler))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
