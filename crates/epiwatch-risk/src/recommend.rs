//! Action recommendation synthesis.
//!
//! Combines the risk tier, the dominant symptom, air quality and facility
//! coverage into an ordered list of action items. Order is significant:
//! outbreak response first, then symptom-specific action, environment,
//! logistics, and finally reporting hygiene. Every stage appends, never
//! replaces, so the list always ends up with 5 or 6 items.

use epiwatch_common::{AirQuality, RiskTier, SymptomObservation};

/// The three tracked symptom categories, in fixed priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symptom {
    Fever,
    Cough,
    Diarrhea,
}

impl Symptom {
    pub fn as_str(&self) -> &'static str {
        match self {
            Symptom::Fever => "Fever",
            Symptom::Cough => "Cough",
            Symptom::Diarrhea => "Diarrhea",
        }
    }
}

/// Symptom with the highest per-10,000-population rate.
///
/// Ties resolve to the earliest symptom in Fever → Cough → Diarrhea
/// order: later candidates must beat the current best strictly.
pub fn dominant_symptom(observation: &SymptomObservation) -> Symptom {
    let population = observation.region_population.max(1.0);
    let rate = |count: f64| (count / population) * 10_000.0;

    let candidates = [
        (Symptom::Fever, rate(observation.fever_cases)),
        (Symptom::Cough, rate(observation.cough_cases)),
        (Symptom::Diarrhea, rate(observation.diarrhea_cases)),
    ];

    let mut best = candidates[0];
    for candidate in &candidates[1..] {
        if candidate.1 > best.1 {
            best = *candidate;
        }
    }
    best.0
}

/// Build the ordered recommendation list for one assessment.
pub fn synthesize(
    tier: RiskTier,
    region: &str,
    observation: &SymptomObservation,
    air: &AirQuality,
    facility_count: usize,
) -> Vec<String> {
    let mut suggestions = Vec::with_capacity(6);

    // Stage 1: tier-driven directive (1 or 2 items)
    match tier {
        RiskTier::High => {
            suggestions.push(format!(
                "Immediately alert public health authorities for {region} and activate outbreak response protocols."
            ));
            suggestions.push(
                "Escalate testing capacity and prepare isolation facilities for high-risk patients."
                    .to_string(),
            );
        }
        RiskTier::Medium => {
            suggestions.push(format!(
                "Enable enhanced surveillance in {region} with daily case tracking at ward/zone level."
            ));
            suggestions.push(
                "Review hospital readiness (beds, oxygen, ICU) in anticipation of a possible surge."
                    .to_string(),
            );
        }
        RiskTier::Low => {
            suggestions.push(format!(
                "Maintain routine surveillance in {region} while focusing on early case reporting."
            ));
        }
    }

    // Stage 2: dominant-symptom directive
    match dominant_symptom(observation) {
        Symptom::Fever => suggestions.push(
            "Investigate clusters of fever in schools, hostels and workplaces; run fever screening camps."
                .to_string(),
        ),
        Symptom::Cough => suggestions.push(
            "Strengthen respiratory hygiene measures: masks in crowded places, cough etiquette, ventilation checks."
                .to_string(),
        ),
        Symptom::Diarrhea => suggestions.push(
            "Investigate water and food safety, test local water sources, and promote use of safe drinking water."
                .to_string(),
        ),
    }

    // Stage 3: air-quality directive
    let category = air.category.as_str();
    let value = air.value;
    if value > 200 {
        suggestions.push(format!(
            "Air quality in {region} is {category} (AQI {value}). Advise masks outdoors and limit exposure for vulnerable groups."
        ));
    } else if value > 100 {
        suggestions.push(format!(
            "Air quality in {region} is {category} (AQI {value}). Consider public advisories for people with asthma and heart disease."
        ));
    } else {
        suggestions.push(format!(
            "Air quality in {region} is {category} (AQI {value}). Maintain current environmental controls."
        ));
    }

    // Stage 4: facility-coverage directive
    if facility_count == 0 {
        suggestions.push(
            "No mapped hospitals found for this region. Maintain an updated health facility directory to improve response time."
                .to_string(),
        );
    } else if facility_count <= 2 && tier >= RiskTier::Medium {
        suggestions.push(format!(
            "Limited hospital coverage ({facility_count} known facilities). Prepare referral pathways to nearby districts."
        ));
    } else {
        suggestions.push(
            "Coordinate with listed hospitals to ensure triage, isolation, and referral protocols are clearly defined."
                .to_string(),
        );
    }

    // Stage 5: data-quality directive, always present
    suggestions.push(
        "Standardize daily data reporting (same time, same fields) to improve model reliability and early warning accuracy."
            .to_string(),
    );

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(fever: f64, cough: f64, diarrhea: f64, pop: f64) -> SymptomObservation {
        SymptomObservation {
            region: "Surat".to_string(),
            fever_cases: fever,
            cough_cases: cough,
            diarrhea_cases: diarrhea,
            region_population: pop,
        }
    }

    #[test]
    fn test_dominant_symptom_highest_rate() {
        assert_eq!(dominant_symptom(&observation(50.0, 10.0, 5.0, 10000.0)), Symptom::Fever);
        assert_eq!(dominant_symptom(&observation(1.0, 40.0, 5.0, 10000.0)), Symptom::Cough);
        assert_eq!(dominant_symptom(&observation(1.0, 2.0, 50.0, 10000.0)), Symptom::Diarrhea);
    }

    #[test]
    fn test_dominant_symptom_tie_breaks_in_fixed_order() {
        // All equal: fever wins
        assert_eq!(dominant_symptom(&observation(10.0, 10.0, 10.0, 10000.0)), Symptom::Fever);
        // Cough and diarrhea tied above fever: cough wins
        assert_eq!(dominant_symptom(&observation(1.0, 10.0, 10.0, 10000.0)), Symptom::Cough);
    }

    #[test]
    fn test_list_length_by_tier() {
        let obs = observation(50.0, 10.0, 5.0, 10000.0);
        let air = AirQuality::from_value(130);
        assert_eq!(synthesize(RiskTier::High, "Surat", &obs, &air, 2).len(), 6);
        assert_eq!(synthesize(RiskTier::Medium, "Surat", &obs, &air, 2).len(), 6);
        assert_eq!(synthesize(RiskTier::Low, "Surat", &obs, &air, 2).len(), 5);
    }

    #[test]
    fn test_high_tier_escalation_leads() {
        let obs = observation(50.0, 10.0, 5.0, 10000.0);
        let air = AirQuality::from_value(130);
        let items = synthesize(RiskTier::High, "Surat", &obs, &air, 2);
        assert!(items[0].contains("alert public health authorities"));
        assert!(items[1].contains("Escalate testing capacity"));
        assert!(items[2].contains("fever"));
    }

    #[test]
    fn test_aqi_thresholds() {
        let obs = observation(50.0, 10.0, 5.0, 10000.0);

        let severe = synthesize(RiskTier::Low, "Delhi", &obs, &AirQuality::from_value(220), 0);
        assert!(severe.iter().any(|s| s.contains("masks outdoors")));
        assert!(severe.iter().any(|s| s.contains("AQI 220") && s.contains("Poor")));

        let moderate = synthesize(RiskTier::Low, "Surat", &obs, &AirQuality::from_value(130), 2);
        assert!(moderate.iter().any(|s| s.contains("asthma and heart disease")));

        let fine = synthesize(RiskTier::Low, "Kochi", &obs, &AirQuality::from_value(60), 0);
        assert!(fine.iter().any(|s| s.contains("Maintain current environmental controls")));
    }

    #[test]
    fn test_facility_coverage_branches() {
        let obs = observation(50.0, 10.0, 5.0, 10000.0);
        let air = AirQuality::from_value(90);

        let none = synthesize(RiskTier::High, "Nowhereville", &obs, &air, 0);
        assert!(none.iter().any(|s| s.contains("No mapped hospitals")));

        let limited = synthesize(RiskTier::High, "Surat", &obs, &air, 2);
        assert!(limited.iter().any(|s| s.contains("Limited hospital coverage (2 known facilities)")));

        // Low tier never triggers the limited-coverage warning
        let low = synthesize(RiskTier::Low, "Surat", &obs, &air, 2);
        assert!(low.iter().any(|s| s.contains("Coordinate with listed hospitals")));

        let plenty = synthesize(RiskTier::High, "Metro", &obs, &air, 5);
        assert!(plenty.iter().any(|s| s.contains("Coordinate with listed hospitals")));
    }

    #[test]
    fn test_data_quality_item_always_last() {
        let obs = observation(50.0, 10.0, 5.0, 10000.0);
        let air = AirQuality::from_value(90);
        for tier in [RiskTier::Low, RiskTier::Medium, RiskTier::High] {
            let items = synthesize(tier, "Surat", &obs, &air, 2);
            assert!(items.last().unwrap().contains("Standardize daily data reporting"));
        }
    }
}
