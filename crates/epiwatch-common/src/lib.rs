//! epiwatch-common — Shared types and errors used across all Epiwatch crates.

pub mod error;
pub mod entities;

// Re-export commonly used types
pub use entities::{
    AirQuality, AqiCategory, AssessmentRecord, Facility, FeatureVector, NewAssessmentRecord,
    RiskTier, SymptomObservation,
};
pub use error::{ApiError, EpiwatchError, Result};
