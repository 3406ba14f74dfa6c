//! Assessment pipeline orchestration.
//!
//! One call per observation: validate, build the feature vector, score,
//! tier, pull regional context, synthesize recommendations and construct
//! the record. No retries anywhere; every step is local and either
//! succeeds deterministically or fails the whole request. The record is
//! only handed back on full success, so callers never persist a partial
//! assessment.

use chrono::Utc;
use uuid::Uuid;

use epiwatch_common::{
    EpiwatchError, Facility, NewAssessmentRecord, Result, RiskTier, SymptomObservation,
};
use epiwatch_context::ContextDirectory;
use epiwatch_model::Scorer;

use crate::recommend::synthesize;

/// Everything produced by one pipeline run: the record to persist plus
/// the response-only context (facility list and recommendations).
#[derive(Debug, Clone)]
pub struct Assessment {
    pub record: NewAssessmentRecord,
    pub hospitals: Vec<Facility>,
    pub suggestions: Vec<String>,
}

fn check_count(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(EpiwatchError::invalid_input(field, "must be a number"));
    }
    if value < 0.0 {
        return Err(EpiwatchError::invalid_input(field, "must not be negative"));
    }
    Ok(())
}

fn validate(observation: &SymptomObservation) -> Result<()> {
    check_count("fever_cases", observation.fever_cases)?;
    check_count("cough_cases", observation.cough_cases)?;
    check_count("diarrhea_cases", observation.diarrhea_cases)?;
    if !observation.region_population.is_finite() {
        return Err(EpiwatchError::invalid_input("region_population", "must be a number"));
    }
    if observation.region_population < 1.0 {
        return Err(EpiwatchError::invalid_input(
            "region_population",
            "must be at least 1",
        ));
    }
    Ok(())
}

/// Run one outbreak-risk assessment.
///
/// `scorer` is `None` while no model artifact is installed; that is a
/// service-level condition (503), distinct from input validation.
pub fn assess(
    observation: &SymptomObservation,
    user_id: Uuid,
    scorer: Option<&dyn Scorer>,
    directory: &ContextDirectory,
) -> Result<Assessment> {
    validate(observation)?;

    let scorer = scorer.ok_or_else(|| {
        EpiwatchError::ModelUnavailable("no model artifact loaded; train or install one".to_string())
    })?;

    let features = observation.feature_vector();
    let probability = scorer.score(&features);

    // Strict inequality: exactly 0.5 is a negative call.
    let prediction = i32::from(probability > 0.5);
    let tier = RiskTier::from_probability(probability);

    let air = directory.air_quality(&observation.region);
    let hospitals = directory.facilities(&observation.region).to_vec();

    let suggestions = synthesize(tier, &observation.region, observation, &air, hospitals.len());

    let record = NewAssessmentRecord {
        user_id,
        timestamp: Utc::now(),
        region: observation.region.clone(),
        fever_cases: observation.fever_cases.floor() as i64,
        cough_cases: observation.cough_cases.floor() as i64,
        diarrhea_cases: observation.diarrhea_cases.floor() as i64,
        region_population: observation.region_population.floor() as i64,
        prediction,
        probability: to_percent(probability),
        risk_tier: tier,
        aqi_value: air.value,
        aqi_category: air.category,
    };

    tracing::info!(
        region = %record.region,
        probability = record.probability,
        risk = tier.as_str(),
        aqi = air.value,
        hospitals = hospitals.len(),
        "Assessment completed"
    );

    Ok(Assessment {
        record,
        hospitals,
        suggestions,
    })
}

/// Probability in [0, 1] to a percentage rounded to 2 decimal places.
fn to_percent(probability: f64) -> f64 {
    (probability * 10_000.0).round() / 100.0
}
