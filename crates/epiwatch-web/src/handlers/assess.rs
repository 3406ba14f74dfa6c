//! Assessment API — runs the risk pipeline and records the result.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use epiwatch_common::{ApiError, AqiCategory, Facility, SymptomObservation};
use epiwatch_risk::assess;

use crate::state::{AppEvent, SharedState};

#[derive(Debug, Deserialize)]
pub struct AssessRequest {
    pub region: Option<String>,
    pub fever_cases: f64,
    pub cough_cases: f64,
    pub diarrhea_cases: f64,
    pub region_population: f64,
}

#[derive(Debug, Serialize)]
pub struct AqiBody {
    pub value: u32,
    pub category: AqiCategory,
}

#[derive(Debug, Serialize)]
pub struct AssessResponse {
    pub prediction: i32,
    pub probability: f64,
    pub risk_level: &'static str,
    pub aqi: AqiBody,
    pub hospitals: Vec<Facility>,
    pub suggestions: Vec<String>,
}

/// POST /api/assess — assess one symptom observation.
///
/// The record is appended only after the whole pipeline succeeded, so a
/// validation failure or a missing model never leaves partial history.
pub async fn api_assess(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(request): Json<AssessRequest>,
) -> Result<Json<AssessResponse>, ApiError> {
    let user_id = super::user_from_headers(&headers)?;

    let region = request
        .region
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| "Unknown".to_string());

    let observation = SymptomObservation {
        region,
        fever_cases: request.fever_cases,
        cough_cases: request.cough_cases,
        diarrhea_cases: request.diarrhea_cases,
        region_population: request.region_population,
    };

    let assessment = assess(&observation, user_id, state.scorer(), &state.directory)?;

    let response = AssessResponse {
        prediction: assessment.record.prediction,
        probability: assessment.record.probability,
        risk_level: assessment.record.risk_tier.as_str(),
        aqi: AqiBody {
            value: assessment.record.aqi_value,
            category: assessment.record.aqi_category,
        },
        hospitals: assessment.hospitals,
        suggestions: assessment.suggestions,
    };

    let event = AppEvent::AssessmentCompleted {
        region: assessment.record.region.clone(),
        risk_level: assessment.record.risk_tier.as_str().to_string(),
        probability: assessment.record.probability,
    };

    state.store.append(assessment.record).await?;
    let _ = state.event_tx.send(event);

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use epiwatch_context::ContextDirectory;
    use epiwatch_model::MockScorer;
    use epiwatch_store::{MemoryRecordStore, RecordStore};
    use uuid::Uuid;

    use crate::state::{AppState, LoadedModel};

    fn test_state(probability: Option<f64>) -> (SharedState, Arc<MemoryRecordStore>) {
        let store = Arc::new(MemoryRecordStore::new());
        let model = probability.map(|p| LoadedModel {
            scorer: Arc::new(MockScorer::with_probability(p)),
            family: "mock",
            version: "test".to_string(),
            trained_at: None,
        });
        let state = AppState::new(model, ContextDirectory::builtin(), store.clone());
        (Arc::new(state), store)
    }

    fn request(region: &str, population: f64) -> AssessRequest {
        AssessRequest {
            region: Some(region.to_string()),
            fever_cases: 50.0,
            cough_cases: 10.0,
            diarrhea_cases: 5.0,
            region_population: population,
        }
    }

    #[tokio::test]
    async fn test_assess_returns_api_shape_and_persists() {
        let (state, store) = test_state(Some(0.82));
        let mut headers = HeaderMap::new();
        let user = Uuid::new_v4();
        headers.insert("x-user-id", user.to_string().parse().unwrap());

        let Json(response) = api_assess(State(state), headers, Json(request("Surat", 10000.0)))
            .await
            .unwrap();

        assert_eq!(response.prediction, 1);
        assert_eq!(response.probability, 82.0);
        assert_eq!(response.risk_level, "High");
        assert_eq!(response.aqi.value, 130);
        assert_eq!(response.hospitals.len(), 2);
        assert_eq!(response.suggestions.len(), 6);
        assert_eq!(store.records_for_user(user).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_model_unavailable_writes_nothing() {
        let (state, store) = test_state(None);
        let result = api_assess(
            State(state),
            HeaderMap::new(),
            Json(request("Surat", 10000.0)),
        )
        .await;
        assert!(result.is_err());
        assert!(store.records_for_user(Uuid::nil()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_population_writes_nothing() {
        let (state, store) = test_state(Some(0.82));
        let result = api_assess(
            State(state),
            HeaderMap::new(),
            Json(request("Surat", 0.0)),
        )
        .await;
        assert!(result.is_err());
        assert!(store.records_for_user(Uuid::nil()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_region_defaults_to_unknown() {
        let (state, store) = test_state(Some(0.2));
        let mut req = request("", 10000.0);
        req.region = None;
        let Json(response) = api_assess(State(state), HeaderMap::new(), Json(req))
            .await
            .unwrap();
        assert_eq!(response.aqi.value, 90);
        let records = store.records_for_user(Uuid::nil()).await.unwrap();
        assert_eq!(records[0].region, "Unknown");
    }
}
