//! Worst-of-two tier classification
//!
//! Each metric of a reading is looked up independently in the same ordered
//! table; the reading gets the more severe of the two tiers. Metrics are never
//! averaged or summed.

use super::types::{Dimension, ExposureReading, TierDefinition, TierTable};
use tracing::{debug, warn};

/// Classify a reading against a tier table
///
/// Returns the definition of the higher of the chemical tier and the nicotine
/// tier. Every finite non-negative value belongs to exactly one tier, fractions
/// between two whole-number bounds included. A negative or NaN metric
/// contributes nothing; if neither metric matches, the lowest tier is returned.
pub fn classify<'t>(table: &'t TierTable, reading: &ExposureReading) -> &'t TierDefinition {
    &table.tiers[tier_index(table, reading)]
}

/// Index into `table.tiers` that `classify` returns
pub fn tier_index(table: &TierTable, reading: &ExposureReading) -> usize {
    if !reading.is_well_formed() {
        warn!(
            product = %table.product,
            chemical = reading.chemical,
            nicotine = reading.nicotine,
            "Anomalous exposure reading; metrics should be finite and non-negative"
        );
    }

    let chemical = table.find_index(Dimension::Chemical, reading.chemical);
    let nicotine = table.find_index(Dimension::Nicotine, reading.nicotine);

    if chemical.is_none() || nicotine.is_none() {
        debug!(
            product = %table.product,
            ?chemical,
            ?nicotine,
            "Reading metric matched no tier range"
        );
    }

    // None orders below Some, so this keeps whichever index was found
    chemical.max(nicotine).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::tables::{SMOKING_TIERS, VAPE_TIERS};
    use crate::health::types::RiskTier;

    fn tier_of(table: &TierTable, chemical: f64, nicotine: f64) -> RiskTier {
        classify(table, &ExposureReading::new(chemical, nicotine)).tier
    }

    #[test]
    fn test_chemical_dominates() {
        // 5000 mg tar is High, 100 mg nicotine is Safe
        let def = classify(&SMOKING_TIERS, &ExposureReading::new(5000.0, 100.0));
        assert_eq!(def.tier, RiskTier::High);
        assert_eq!(def.label, "High");
    }

    #[test]
    fn test_vape_nicotine_emergency() {
        let def = classify(&VAPE_TIERS, &ExposureReading::new(0.0, 700.0));
        assert_eq!(def.tier, RiskTier::Emergency);
        assert_eq!(def.label, "Emergency");
    }

    #[test]
    fn test_worst_of_two() {
        // chemical in tier 2 (Monitoring), nicotine in tier 5 (Critical)
        for table in [&SMOKING_TIERS, &VAPE_TIERS] {
            assert_eq!(tier_of(table, 2000.0, 600.0), RiskTier::Critical);
            assert_eq!(tier_of(table, 7000.0, 200.0), RiskTier::Critical);
        }
    }

    #[test]
    fn test_negative_reading_falls_back_to_lowest_tier() {
        let def = classify(&SMOKING_TIERS, &ExposureReading::new(-1.0, -1.0));
        assert_eq!(tier_index(&SMOKING_TIERS, &ExposureReading::new(-1.0, -1.0)), 0);
        assert_eq!(def.tier, RiskTier::SafeMonitoring);
        assert_eq!(def.label, "Safe / Monitoring");

        let def = classify(&VAPE_TIERS, &ExposureReading::new(-1.0, -1.0));
        assert_eq!(def.tier, RiskTier::SafeMonitoring);
    }

    #[test]
    fn test_one_metric_missing_uses_the_other() {
        // Negative chemical matches nothing; nicotine alone decides
        assert_eq!(tier_of(&SMOKING_TIERS, -5.0, 400.0), RiskTier::High);
        assert_eq!(tier_of(&SMOKING_TIERS, 3500.0, f64::NAN), RiskTier::Elevated);
    }

    #[test]
    fn test_nan_and_infinity() {
        assert_eq!(tier_of(&SMOKING_TIERS, f64::NAN, f64::NAN), RiskTier::SafeMonitoring);
        assert_eq!(tier_of(&SMOKING_TIERS, f64::INFINITY, 0.0), RiskTier::Emergency);
        assert_eq!(
            tier_of(&VAPE_TIERS, f64::NEG_INFINITY, 0.0),
            RiskTier::SafeMonitoring
        );
    }

    #[test]
    fn test_fractional_value_between_bounds_stays_in_lower_tier() {
        // 4500.5 sits past Elevated's printed max (4500) but below High's min (4501)
        assert_eq!(tier_of(&SMOKING_TIERS, 4500.5, 0.0), RiskTier::Elevated);
        assert_eq!(tier_of(&SMOKING_TIERS, 4500.4, 0.0), RiskTier::Elevated);
        assert_eq!(tier_of(&VAPE_TIERS, 1500.5, 0.0), RiskTier::SafeMonitoring);
        assert_eq!(tier_of(&SMOKING_TIERS, 0.0, 650.5), RiskTier::Critical);
        assert_eq!(tier_of(&VAPE_TIERS, 0.0, 650.5), RiskTier::Critical);
        assert_eq!(tier_of(&SMOKING_TIERS, 4500.5, 200.0), RiskTier::Elevated);
    }

    #[test]
    fn test_exact_boundaries_with_other_metric_zero() {
        for table in [&SMOKING_TIERS, &VAPE_TIERS] {
            for def in table.iter().filter(|d| !d.chemical_range.is_unbounded()) {
                let c = def.chemical_range;
                assert_eq!(tier_of(table, c.min, 0.0), def.tier);
                assert_eq!(tier_of(table, c.max, 0.0), def.tier);

                let n = def.nicotine_range;
                assert_eq!(tier_of(table, 0.0, n.min), def.tier);
                assert_eq!(tier_of(table, 0.0, n.max), def.tier);
            }
        }
    }

    #[test]
    fn test_boundary_continuity() {
        for table in [&SMOKING_TIERS, &VAPE_TIERS] {
            for pair in table.tiers.windows(2) {
                let (lower, upper) = (&pair[0], &pair[1]);

                let max = lower.chemical_range.max;
                assert_eq!(tier_of(table, max, 0.0), lower.tier);
                assert_eq!(tier_of(table, max + 1.0, 0.0), upper.tier);

                let max = lower.nicotine_range.max;
                assert_eq!(tier_of(table, 0.0, max), lower.tier);
                assert_eq!(tier_of(table, 0.0, max + 1.0), upper.tier);
            }
        }
    }

    /// 0.25 steps from 0 to `end`, crossing every boundary and the gaps after them
    fn quarter_steps(end: f64) -> impl Iterator<Item = f64> {
        (0..=(end * 4.0) as u32).map(|i| i as f64 * 0.25)
    }

    #[test]
    fn test_monotonic_in_each_metric() {
        for table in [&SMOKING_TIERS, &VAPE_TIERS] {
            for fixed in [0.0, 130.5, 390.0, 700.0] {
                let mut previous = RiskTier::SafeMonitoring;
                for chemical in quarter_steps(9000.0) {
                    let tier = tier_of(table, chemical, fixed);
                    assert!(tier >= previous, "chemical {} dropped tier", chemical);
                    previous = tier;
                }
            }

            for fixed in [0.0, 2000.0, 4500.5, 9000.0] {
                let mut previous = RiskTier::SafeMonitoring;
                for nicotine in quarter_steps(800.0) {
                    let tier = tier_of(table, fixed, nicotine);
                    assert!(tier >= previous, "nicotine {} dropped tier", nicotine);
                    previous = tier;
                }
            }
        }
    }

    #[test]
    fn test_every_fractional_value_has_a_tier() {
        for table in [&SMOKING_TIERS, &VAPE_TIERS] {
            for value in quarter_steps(9000.0) {
                assert!(table.find_index(Dimension::Chemical, value).is_some(), "{}", value);
            }
            for value in quarter_steps(800.0) {
                assert!(table.find_index(Dimension::Nicotine, value).is_some(), "{}", value);
            }
        }
    }

    #[test]
    fn test_result_never_below_either_metric() {
        for chemical in (0..=9000).step_by(500) {
            for nicotine in (0..=700).step_by(50) {
                let reading = ExposureReading::new(chemical as f64, nicotine as f64);
                let index = tier_index(&SMOKING_TIERS, &reading);

                let c = SMOKING_TIERS
                    .find_index(Dimension::Chemical, reading.chemical)
                    .unwrap();
                let n = SMOKING_TIERS
                    .find_index(Dimension::Nicotine, reading.nicotine)
                    .unwrap();
                assert_eq!(index, c.max(n));
            }
        }
    }

    #[test]
    fn test_concurrent_classification() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                std::thread::spawn(move || {
                    let reading = ExposureReading::new(1000.0 * i as f64, 0.0);
                    classify(&SMOKING_TIERS, &reading).tier
                })
            })
            .collect();

        let tiers: Vec<RiskTier> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(tiers[0], RiskTier::SafeMonitoring);
        assert_eq!(tiers[5], RiskTier::High);
        assert_eq!(tiers[7], RiskTier::Critical);
    }
}
