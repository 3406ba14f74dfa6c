//! epiwatch-model — The classifier oracle behind the assessment pipeline.
//!
//! The rest of the system only sees the [`Scorer`] trait: a fixed-order
//! feature vector in, a probability of the positive outbreak class out.
//! Concrete models are loaded from a versioned JSON artifact at startup.

pub mod artifact;
pub mod scorer;

pub use artifact::{ModelArtifact, ModelFamily, Stump};
pub use scorer::{MockScorer, Scorer};
