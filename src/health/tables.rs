//! Static tier tables
//!
//! One table per product line. Both share the same bounds and differ only in
//! their descriptive text. Ranges are printed in whole milligrams: each tier's
//! min is the previous tier's max plus one. A fractional total between the two
//! counts toward the lower tier.

use super::error::TableError;
use super::types::{Dimension, ProductLine, RiskTier, TierDefinition, TierRange, TierTable};

/// Smoking tiers, keyed by monthly tar (mg) and nicotine (mg)
pub static SMOKING_TIERS: TierTable = TierTable {
    product: ProductLine::Smoking,
    tiers: [
        TierDefinition {
            tier: RiskTier::SafeMonitoring,
            chemical_range: TierRange::new(0.0, 1500.0),
            nicotine_range: TierRange::new(0.0, 120.0),
            label: "Safe / Monitoring",
            health_impact: "Statistical likelihood of lung stress is minimal; natural clearing processes remain highly active.",
            addiction_impact: "Low impact on brain chemistry; behavioral pattern is likely situational rather than a physical requirement.",
        },
        TierDefinition {
            tier: RiskTier::Monitoring,
            chemical_range: TierRange::new(1501.0, 3000.0),
            nicotine_range: TierRange::new(121.0, 250.0),
            label: "Monitoring",
            health_impact: "Possible early probability of minor airway irritation or statistical decrease in peak athletic stamina.",
            addiction_impact: "Moderate behavioral impact; daily routines begin to statistically align with specific smoking times.",
        },
        TierDefinition {
            tier: RiskTier::Elevated,
            chemical_range: TierRange::new(3001.0, 4500.0),
            nicotine_range: TierRange::new(251.0, 380.0),
            label: "Elevated",
            health_impact: "Increased statistical probability of cardiovascular strain; potential for heart rate to remain elevated post-activity.",
            addiction_impact: "High addiction potential; statistical likelihood of withdrawal-related irritability or restlessness if intake is delayed.",
        },
        TierDefinition {
            tier: RiskTier::High,
            chemical_range: TierRange::new(4501.0, 6000.0),
            nicotine_range: TierRange::new(381.0, 500.0),
            label: "High",
            health_impact: "Significant statistical probability of persistent lung stress; the body's self-cleaning efficiency is likely hampered.",
            addiction_impact: "Very high addiction impact; behavioral patterns are frequently dictated by the brain's chemical requirement for nicotine.",
        },
        TierDefinition {
            tier: RiskTier::Critical,
            chemical_range: TierRange::new(6001.0, 8000.0),
            nicotine_range: TierRange::new(501.0, 650.0),
            label: "Critical",
            health_impact: "High statistical likelihood of chronic respiratory strain and consistent stress on the heart and blood vessels.",
            addiction_impact: "Extreme addiction impact; statistical data suggests smoking likely occurs within 30 minutes of waking; high behavioral dependency.",
        },
        TierDefinition {
            tier: RiskTier::Emergency,
            chemical_range: TierRange::unbounded(8001.0),
            nicotine_range: TierRange::unbounded(651.0),
            label: "Emergency",
            health_impact: "Severe statistical probability of long-term lung and heart fatigue; physical capacity is likely consistently compromised.",
            addiction_impact: "Maximum addiction impact; daily behavior is almost entirely focused on maintaining nicotine levels; highest probability of severe withdrawal.",
        },
    ],
};

/// Vape tiers, keyed by monthly chemical exposure index and nicotine (mg)
pub static VAPE_TIERS: TierTable = TierTable {
    product: ProductLine::Vape,
    tiers: [
        TierDefinition {
            tier: RiskTier::SafeMonitoring,
            chemical_range: TierRange::new(0.0, 1500.0),
            nicotine_range: TierRange::new(0.0, 120.0),
            label: "Safe / Monitoring",
            health_impact: "Statistical likelihood of airway irritation is minimal; lung recovery remains highly active.",
            addiction_impact: "Low impact on brain chemistry; usage is likely situational rather than a physical requirement.",
        },
        TierDefinition {
            tier: RiskTier::Monitoring,
            chemical_range: TierRange::new(1501.0, 3000.0),
            nicotine_range: TierRange::new(121.0, 250.0),
            label: "Monitoring",
            health_impact: "Possible early probability of throat dryness or statistical decrease in peak athletic stamina.",
            addiction_impact: "Moderate behavioral impact; daily routines begin to statistically align with specific vaping times.",
        },
        TierDefinition {
            tier: RiskTier::Elevated,
            chemical_range: TierRange::new(3001.0, 4500.0),
            nicotine_range: TierRange::new(251.0, 380.0),
            label: "Elevated",
            health_impact: "Increased statistical probability of cardiovascular strain; heart rate may remain elevated longer.",
            addiction_impact: "High addiction potential; statistical likelihood of cravings or restlessness if vaping is delayed.",
        },
        TierDefinition {
            tier: RiskTier::High,
            chemical_range: TierRange::new(4501.0, 6000.0),
            nicotine_range: TierRange::new(381.0, 500.0),
            label: "High",
            health_impact: "Significant statistical probability of persistent airway stress; body's self-cleaning efficiency may be hampered.",
            addiction_impact: "Very high addiction impact; behavioral patterns frequently dictated by the brain's chemical requirement.",
        },
        TierDefinition {
            tier: RiskTier::Critical,
            chemical_range: TierRange::new(6001.0, 8000.0),
            nicotine_range: TierRange::new(501.0, 650.0),
            label: "Critical",
            health_impact: "High statistical likelihood of chronic respiratory strain and consistent stress on the heart and blood vessels.",
            addiction_impact: "Extreme addiction impact; statistical data suggests vaping occurs frequently throughout the day; high dependency.",
        },
        TierDefinition {
            tier: RiskTier::Emergency,
            chemical_range: TierRange::unbounded(8001.0),
            nicotine_range: TierRange::unbounded(651.0),
            label: "Emergency",
            health_impact: "Severe statistical probability of long-term lung fatigue; physical capacity is likely consistently compromised.",
            addiction_impact: "Maximum addiction impact; daily behavior is almost entirely focused on maintaining nicotine levels.",
        },
    ],
};

/// Largest distance allowed between one tier's printed max and the next
/// tier's min. Values in between belong to the lower tier.
const MAX_BOUNDARY_STEP: f64 = 1.0;

impl TierTable {
    /// Check the invariants `find_index` relies on, per dimension: rows in tier
    /// order, first min at zero, strictly increasing mins, and an unbounded
    /// final row. Each printed max must also sit less than one unit below the
    /// next min, so the printed range matches the band a value is classified into.
    pub fn validate(&self) -> Result<(), TableError> {
        for (i, def) in self.tiers.iter().enumerate() {
            if def.tier.index() != i {
                return Err(TableError::OutOfOrder {
                    position: i,
                    tier: def.tier,
                });
            }
        }

        for dimension in [Dimension::Chemical, Dimension::Nicotine] {
            let first = self.tiers[0].range(dimension);
            if first.min != 0.0 {
                return Err(TableError::FirstMinNotZero {
                    dimension,
                    min: first.min,
                });
            }

            for pair in self.tiers.windows(2) {
                let current = pair[0].range(dimension);
                let next = pair[1].range(dimension);

                if current.min > current.max {
                    return Err(TableError::InvertedRange {
                        dimension,
                        tier: pair[0].tier,
                    });
                }

                let step = next.min - current.max;
                if step <= 0.0 || step > MAX_BOUNDARY_STEP {
                    return Err(TableError::NotContiguous {
                        dimension,
                        tier: pair[0].tier,
                        max: current.max,
                        next_min: next.min,
                    });
                }
            }

            if !self.tiers[self.tiers.len() - 1].range(dimension).is_unbounded() {
                return Err(TableError::LastTierBounded { dimension });
            }
        }

        Ok(())
    }
}
