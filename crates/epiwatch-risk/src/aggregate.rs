//! Per-region rollups over historical assessment records.
//!
//! Everything here is derived on demand and never persisted.

use std::collections::HashMap;

use serde::Serialize;

use epiwatch_common::{AssessmentRecord, RiskTier};

/// Ranked rollup for one region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionSummary {
    pub region: String,
    pub total_assessments: u64,
    pub high_count: u64,
    /// Share of High-tier assessments, rounded to 1 decimal. 0.0 for an
    /// empty group.
    pub high_percent: f64,
}

/// Headline numbers for the overview page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewStats {
    pub total_assessments: u64,
    pub high_risk_count: u64,
    pub region_count: u64,
}

/// Per-region tier series for the dashboard chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierChart {
    pub labels: Vec<String>,
    pub low_counts: Vec<u64>,
    pub medium_counts: Vec<u64>,
    pub high_counts: Vec<u64>,
}

#[derive(Default)]
struct TierCounts {
    low: u64,
    medium: u64,
    high: u64,
}

impl TierCounts {
    fn total(&self) -> u64 {
        self.low + self.medium + self.high
    }
}

fn region_label(record: &AssessmentRecord) -> &str {
    let region = record.region.trim();
    if region.is_empty() {
        "Unknown"
    } else {
        region
    }
}

/// Group records by region in first-seen order.
fn group_by_region(records: &[AssessmentRecord]) -> (Vec<String>, HashMap<String, TierCounts>) {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, TierCounts> = HashMap::new();

    for record in records {
        let label = region_label(record);
        if !groups.contains_key(label) {
            order.push(label.to_string());
        }
        let counts = groups.entry(label.to_string()).or_default();
        match record.risk_tier {
            RiskTier::Low => counts.low += 1,
            RiskTier::Medium => counts.medium += 1,
            RiskTier::High => counts.high += 1,
        }
    }

    (order, groups)
}

/// Reduce a user's records to ranked region summaries.
///
/// Sorted by descending High-tier share, then by descending total count.
/// The sort is stable, so regions tied on both keys keep their first-seen
/// order.
pub fn aggregate_regions(records: &[AssessmentRecord]) -> Vec<RegionSummary> {
    let (order, groups) = group_by_region(records);

    let mut summaries: Vec<RegionSummary> = order
        .into_iter()
        .map(|region| {
            let counts = &groups[&region];
            let total = counts.total();
            let high_percent = if total > 0 {
                let percent = (counts.high as f64 / total as f64) * 100.0;
                (percent * 10.0).round() / 10.0
            } else {
                0.0
            };
            RegionSummary {
                region,
                total_assessments: total,
                high_count: counts.high,
                high_percent,
            }
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.high_percent
            .total_cmp(&a.high_percent)
            .then(b.total_assessments.cmp(&a.total_assessments))
    });

    summaries
}

/// Chart series in first-seen region order.
pub fn tier_chart(records: &[AssessmentRecord]) -> TierChart {
    let (order, groups) = group_by_region(records);
    let mut chart = TierChart {
        labels: Vec::with_capacity(order.len()),
        low_counts: Vec::with_capacity(order.len()),
        medium_counts: Vec::with_capacity(order.len()),
        high_counts: Vec::with_capacity(order.len()),
    };
    for region in order {
        let counts = &groups[&region];
        chart.labels.push(region);
        chart.low_counts.push(counts.low);
        chart.medium_counts.push(counts.medium);
        chart.high_counts.push(counts.high);
    }
    chart
}

/// Headline stats across all of a user's records.
pub fn overview_stats(records: &[AssessmentRecord]) -> OverviewStats {
    let (order, groups) = group_by_region(records);
    let high_risk_count = groups.values().map(|c| c.high).sum();
    OverviewStats {
        total_assessments: records.len() as u64,
        high_risk_count,
        region_count: order.len() as u64,
    }
}
