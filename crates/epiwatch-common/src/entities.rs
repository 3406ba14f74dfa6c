//! Core entity types shared across the assessment pipeline, the record
//! store and the web API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Symptom observation (raw input unit)
// ---------------------------------------------------------------------------

/// One periodic report of regional symptom counts.
///
/// Counts are kept as f64 because the API boundary accepts any
/// numeric-coercible value; they are floored to integers at storage time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomObservation {
    pub region: String,
    pub fever_cases: f64,
    pub cough_cases: f64,
    pub diarrhea_cases: f64,
    pub region_population: f64,
}

impl SymptomObservation {
    /// Build the fixed-order feature vector consumed by the scorer.
    pub fn feature_vector(&self) -> FeatureVector {
        FeatureVector([
            self.fever_cases,
            self.cough_cases,
            self.diarrhea_cases,
            self.region_population,
        ])
    }
}

/// Ordered numeric input to the classifier.
///
/// The order [fever, cough, diarrhea, population] is a contract with the
/// trained model artifact and must never change without retraining.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector(pub [f64; 4]);

impl FeatureVector {
    pub fn as_array(&self) -> [f64; 4] {
        self.0
    }
}

// ---------------------------------------------------------------------------
// Risk tier
// ---------------------------------------------------------------------------

/// Ordinal risk classification derived from the model probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Map a probability in [0, 1] to a tier.
    ///
    /// Boundaries are closed on the upper side: 0.30 is Medium, 0.70 is
    /// High. Total and monotonic over the whole input range.
    pub fn from_probability(probability: f64) -> Self {
        if probability < 0.3 {
            RiskTier::Low
        } else if probability < 0.7 {
            RiskTier::Medium
        } else {
            RiskTier::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }
}

// ---------------------------------------------------------------------------
// Air quality
// ---------------------------------------------------------------------------

/// Qualitative AQI bucket. Derived from the integer value, never stored
/// independently of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AqiCategory {
    Good,
    Satisfactory,
    Moderate,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
    Severe,
}

impl AqiCategory {
    /// Fixed integer breakpoints (Indian AQI-style banding).
    pub fn from_value(value: u32) -> Self {
        match value {
            0..=50 => AqiCategory::Good,
            51..=100 => AqiCategory::Satisfactory,
            101..=200 => AqiCategory::Moderate,
            201..=300 => AqiCategory::Poor,
            301..=400 => AqiCategory::VeryPoor,
            _ => AqiCategory::Severe,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Satisfactory => "Satisfactory",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::Poor => "Poor",
            AqiCategory::VeryPoor => "Very Poor",
            AqiCategory::Severe => "Severe",
        }
    }
}

/// Regional air quality context attached to each assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirQuality {
    pub value: u32,
    pub category: AqiCategory,
}

impl AirQuality {
    pub fn from_value(value: u32) -> Self {
        Self {
            value,
            category: AqiCategory::from_value(value),
        }
    }
}

// ---------------------------------------------------------------------------
// Health facility
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    pub name: String,
    pub phone: String,
    pub address: String,
}

// ---------------------------------------------------------------------------
// Assessment record (persisted output unit)
// ---------------------------------------------------------------------------

/// A completed assessment before the store has assigned an identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAssessmentRecord {
    pub user_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub region: String,
    pub fever_cases: i64,
    pub cough_cases: i64,
    pub diarrhea_cases: i64,
    pub region_population: i64,
    /// Binary outbreak call: 1 when probability > 0.5 (strict).
    pub prediction: i32,
    /// Probability of the positive class, as a percentage rounded to 2 dp.
    pub probability: f64,
    pub risk_tier: RiskTier,
    pub aqi_value: u32,
    pub aqi_category: AqiCategory,
}

impl NewAssessmentRecord {
    pub fn with_id(self, id: i64) -> AssessmentRecord {
        AssessmentRecord {
            id,
            user_id: self.user_id,
            timestamp: self.timestamp,
            region: self.region,
            fever_cases: self.fever_cases,
            cough_cases: self.cough_cases,
            diarrhea_cases: self.diarrhea_cases,
            region_population: self.region_population,
            prediction: self.prediction,
            probability: self.probability,
            risk_tier: self.risk_tier,
            aqi_value: self.aqi_value,
            aqi_category: self.aqi_category,
        }
    }
}

/// One persisted outbreak-risk evaluation. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: i64,
    pub user_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub region: String,
    pub fever_cases: i64,
    pub cough_cases: i64,
    pub diarrhea_cases: i64,
    pub region_population: i64,
    pub prediction: i32,
    pub probability: f64,
    pub risk_tier: RiskTier,
    pub aqi_value: u32,
    pub aqi_category: AqiCategory,
}
