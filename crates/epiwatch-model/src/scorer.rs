//! Trait for outbreak probability scoring.
//!
//! Abstracts over the concrete model family so the pipeline is never
//! coupled to how the classifier was trained.

use epiwatch_common::FeatureVector;

/// Opaque probability oracle.
///
/// Implementations must be pure and in-process: one call, one probability
/// in [0, 1], no suspension points and no retries.
pub trait Scorer: Send + Sync {
    /// Probability of the positive outbreak class for one observation.
    fn score(&self, features: &FeatureVector) -> f64;

    /// Short identifier of the model family, e.g. "logistic".
    fn family(&self) -> &'static str;
}

// ── Mock Implementation for Testing ────────────────────────────────────────

/// Scorer that returns a fixed probability, for unit and scenario tests.
pub struct MockScorer {
    probability: f64,
}

impl MockScorer {
    pub fn with_probability(probability: f64) -> Self {
        Self { probability }
    }
}

impl Scorer for MockScorer {
    fn score(&self, _features: &FeatureVector) -> f64 {
        self.probability
    }

    fn family(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_scorer_fixed_output() {
        let scorer = MockScorer::with_probability(0.82);
        let features = FeatureVector([50.0, 10.0, 5.0, 10000.0]);
        assert_eq!(scorer.score(&features), 0.82);
        assert_eq!(scorer.family(), "mock");
    }
}
