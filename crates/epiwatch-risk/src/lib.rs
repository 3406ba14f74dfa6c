//! epiwatch-risk — Outbreak risk assessment core.
//!
//! Turns raw regional symptom counts into a calibrated risk call:
//! probability scoring, tier mapping, multi-factor action recommendations
//! and the per-region rollups behind the monitoring dashboard.

pub mod aggregate;
pub mod pipeline;
pub mod recommend;

pub use aggregate::{aggregate_regions, overview_stats, tier_chart, OverviewStats, RegionSummary, TierChart};
pub use pipeline::{assess, Assessment};
pub use recommend::{dominant_symptom, synthesize, Symptom};
