//! Display-side view of a classification
//!
//! `Severity` is the coarse styling class a dashboard applies to a tier label;
//! `HealthReport` bundles a reading with everything needed to render it.

use super::classifier::classify;
use super::types::{ExposureReading, ProductLine, RiskTier};
use serde::Serialize;
use std::fmt;

/// Coarse severity class for a tier label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Destructive,
}

impl Severity {
    /// Map a tier label to a severity class
    ///
    /// Case-insensitive substring checks: "safe" first, then "monitoring" or
    /// "elevated". Anything else gets the highest severity.
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("safe") {
            Severity::Success
        } else if label.contains("monitoring") || label.contains("elevated") {
            Severity::Warning
        } else {
            Severity::Destructive
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Warning => write!(f, "warning"),
            Severity::Destructive => write!(f, "destructive"),
        }
    }
}

/// Classified monthly exposure, ready to render
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub product: ProductLine,
    pub reading: ExposureReading,
    pub tier: RiskTier,
    pub label: &'static str,
    pub severity: Severity,
    pub health_impact: &'static str,
    pub addiction_impact: &'static str,
}

impl HealthReport {
    /// Classify `reading` against the table of `product`
    pub fn assess(product: ProductLine, reading: ExposureReading) -> Self {
        let def = classify(product.table(), &reading);
        Self {
            product,
            reading,
            tier: def.tier,
            label: def.label,
            severity: Severity::from_label(def.label),
            health_impact: def.health_impact,
            addiction_impact: def.addiction_impact,
        }
    }
}

impl fmt::Display for HealthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Risk tier:  {} ({})", self.label, self.severity)?;
        writeln!(
            f,
            "Monthly {}: {:.1} | Monthly nicotine: {:.1} mg",
            self.product.chemical_label(),
            self.reading.chemical,
            self.reading.nicotine
        )?;
        writeln!(f, "Health:     {}", self.health_impact)?;
        write!(f, "Addiction:  {}", self.addiction_impact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_from_label() {
        assert_eq!(Severity::from_label("Safe / Monitoring"), Severity::Success);
        assert_eq!(Severity::from_label("Monitoring"), Severity::Warning);
        assert_eq!(Severity::from_label("ELEVATED"), Severity::Warning);
        assert_eq!(Severity::from_label("High"), Severity::Destructive);
        assert_eq!(Severity::from_label("Critical"), Severity::Destructive);
        assert_eq!(Severity::from_label("Emergency"), Severity::Destructive);
        assert_eq!(Severity::from_label(""), Severity::Destructive);
    }

    #[test]
    fn test_assess_smoking() {
        let report = HealthReport::assess(ProductLine::Smoking, ExposureReading::new(5000.0, 100.0));

        assert_eq!(report.tier, RiskTier::High);
        assert_eq!(report.severity, Severity::Destructive);
        assert!(report.health_impact.contains("lung stress"));
    }

    #[test]
    fn test_assess_vape_uses_vape_text() {
        let report = HealthReport::assess(ProductLine::Vape, ExposureReading::new(100.0, 10.0));

        assert_eq!(report.tier, RiskTier::SafeMonitoring);
        assert_eq!(report.severity, Severity::Success);
        assert!(report.health_impact.contains("airway irritation"));
    }

    #[test]
    fn test_report_serialization() {
        let report = HealthReport::assess(ProductLine::Vape, ExposureReading::new(0.0, 300.0));
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["product"], "vape");
        assert_eq!(json["tier"], "elevated");
        assert_eq!(json["severity"], "warning");
        assert_eq!(json["label"], "Elevated");
    }
}
