//! Versioned model artifacts.
//!
//! An artifact is a small JSON file produced by the offline training job.
//! It carries version metadata plus the parameters of one model family.
//! Loading happens once at startup; a missing artifact means the service
//! runs without a model and every assessment fails with 503 until an
//! operator installs one.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use epiwatch_common::{EpiwatchError, FeatureVector, Result};

use crate::scorer::Scorer;

/// One axis-aligned decision stump: contributes `left` to the logit when
/// the selected feature is <= threshold, `right` otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stump {
    pub feature: usize,
    pub threshold: f64,
    pub left: f64,
    pub right: f64,
}

/// Model parameters, one variant per supported family.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum ModelFamily {
    /// Logistic regression over the 4-feature vector.
    Logistic { weights: [f64; 4], bias: f64 },
    /// Boosted decision stumps, summed into a logit.
    GradientBoosted { base_score: f64, trees: Vec<Stump> },
}

/// A loaded, validated model artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub version: String,
    pub trained_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub model: ModelFamily,
}

impl ModelArtifact {
    /// Load and validate an artifact from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let artifact: ModelArtifact = serde_json::from_str(&raw)?;
        artifact.validate()?;
        tracing::info!(
            version = %artifact.version,
            family = artifact.family(),
            path = %path.as_ref().display(),
            "Loaded model artifact"
        );
        Ok(artifact)
    }

    /// Load an artifact, treating a missing file as "no model yet".
    pub fn load_if_present(path: impl AsRef<Path>) -> Result<Option<Self>> {
        if !path.as_ref().exists() {
            tracing::warn!(
                path = %path.as_ref().display(),
                "No model artifact found; assessments will be unavailable"
            );
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    fn validate(&self) -> Result<()> {
        match &self.model {
            ModelFamily::Logistic { .. } => Ok(()),
            ModelFamily::GradientBoosted { trees, .. } => {
                for (i, stump) in trees.iter().enumerate() {
                    if stump.feature >= 4 {
                        return Err(EpiwatchError::Config(format!(
                            "stump {} references feature index {} (feature vector has 4 entries)",
                            i, stump.feature
                        )));
                    }
                }
                Ok(())
            }
        }
    }
}

impl Scorer for ModelArtifact {
    fn score(&self, features: &FeatureVector) -> f64 {
        let x = features.as_array();
        let logit = match &self.model {
            ModelFamily::Logistic { weights, bias } => {
                x.iter().zip(weights.iter()).map(|(xi, wi)| xi * wi).sum::<f64>() + bias
            }
            ModelFamily::GradientBoosted { base_score, trees } => {
                let mut acc = *base_score;
                for stump in trees {
                    acc += if x[stump.feature] <= stump.threshold {
                        stump.left
                    } else {
                        stump.right
                    };
                }
                acc
            }
        };
        sigmoid(logit)
    }

    fn family(&self) -> &'static str {
        match &self.model {
            ModelFamily::Logistic { .. } => "logistic",
            ModelFamily::GradientBoosted { .. } => "gradient_boosted",
        }
    }
}

fn sigmoid(logit: f64) -> f64 {
    1.0 / (1.0 + (-logit).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(fever: f64, cough: f64, diarrhea: f64, pop: f64) -> FeatureVector {
        FeatureVector([fever, cough, diarrhea, pop])
    }

    #[test]
    fn test_sigmoid_bounds() {
        assert!(sigmoid(-100.0) < 1e-6);
        assert!(sigmoid(100.0) > 1.0 - 1e-6);
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_logistic_score_in_unit_interval() {
        let artifact = ModelArtifact {
            version: "1".to_string(),
            trained_at: None,
            model: ModelFamily::Logistic {
                weights: [0.05, 0.03, 0.02, -0.0001],
                bias: -1.0,
            },
        };
        let p = artifact.score(&features(50.0, 10.0, 5.0, 10000.0));
        assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn test_logistic_more_cases_raise_probability() {
        let artifact = ModelArtifact {
            version: "1".to_string(),
            trained_at: None,
            model: ModelFamily::Logistic {
                weights: [0.05, 0.03, 0.02, -0.0001],
                bias: -1.0,
            },
        };
        let low = artifact.score(&features(5.0, 1.0, 0.0, 10000.0));
        let high = artifact.score(&features(500.0, 100.0, 50.0, 10000.0));
        assert!(high > low);
    }

    #[test]
    fn test_stump_routing() {
        let artifact = ModelArtifact {
            version: "1".to_string(),
            trained_at: None,
            model: ModelFamily::GradientBoosted {
                base_score: 0.0,
                trees: vec![Stump {
                    feature: 0,
                    threshold: 20.0,
                    left: -2.0,
                    right: 2.0,
                }],
            },
        };
        assert!(artifact.score(&features(10.0, 0.0, 0.0, 1000.0)) < 0.5);
        assert!(artifact.score(&features(30.0, 0.0, 0.0, 1000.0)) > 0.5);
    }

    #[test]
    fn test_parse_versioned_artifact() {
        let raw = r#"{
            "version": "2024-11-03",
            "trained_at": "2024-11-03T09:00:00Z",
            "family": "logistic",
            "weights": [0.04, 0.02, 0.03, -0.0002],
            "bias": -0.8
        }"#;
        let artifact: ModelArtifact = serde_json::from_str(raw).unwrap();
        assert_eq!(artifact.version, "2024-11-03");
        assert_eq!(artifact.family(), "logistic");
    }

    #[test]
    fn test_unknown_family_rejected() {
        let raw = r#"{ "version": "1", "family": "transformer" }"#;
        assert!(serde_json::from_str::<ModelArtifact>(raw).is_err());
    }

    #[test]
    fn test_invalid_feature_index_rejected() {
        let artifact = ModelArtifact {
            version: "1".to_string(),
            trained_at: None,
            model: ModelFamily::GradientBoosted {
                base_score: 0.0,
                trees: vec![Stump {
                    feature: 7,
                    threshold: 0.0,
                    left: 0.0,
                    right: 0.0,
                }],
            },
        };
        assert!(artifact.validate().is_err());
    }

    #[test]
    fn test_load_if_present_missing_file() {
        let loaded = ModelArtifact::load_if_present("/nonexistent/model.json").unwrap();
        assert!(loaded.is_none());
    }
}
