//! Core data types for health-risk classification
//!
//! This module defines the value types shared by the tier tables and the
//! classifier:
//! - `ExposureReading`: accumulated monthly exposure for one product line
//! - `RiskTier`: the six ordered severity levels
//! - `TierRange` and `TierDefinition`: one row of a tier table
//! - `TierTable`: the six rows for a product line

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of tiers in every table
pub const TIER_COUNT: usize = 6;

/// A user's accumulated monthly exposure
///
/// `chemical` is tar in milligrams for smoking and the chemical exposure
/// index (CEI) for vaping. `nicotine` is milligrams for both.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExposureReading {
    pub chemical: f64,
    pub nicotine: f64,
}

impl ExposureReading {
    pub fn new(chemical: f64, nicotine: f64) -> Self {
        Self { chemical, nicotine }
    }

    /// Both metrics are finite and non-negative
    pub fn is_well_formed(&self) -> bool {
        [self.chemical, self.nicotine]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// Product line a reading and table belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductLine {
    Smoking,
    Vape,
}

impl ProductLine {
    pub fn all() -> &'static [ProductLine] {
        &[ProductLine::Smoking, ProductLine::Vape]
    }

    /// Short name of the chemical metric for this product line
    pub fn chemical_label(&self) -> &'static str {
        match self {
            ProductLine::Smoking => "TAR",
            ProductLine::Vape => "CEI",
        }
    }

    /// The static tier table for this product line
    pub fn table(&self) -> &'static TierTable {
        match self {
            ProductLine::Smoking => &super::tables::SMOKING_TIERS,
            ProductLine::Vape => &super::tables::VAPE_TIERS,
        }
    }
}

impl fmt::Display for ProductLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductLine::Smoking => write!(f, "smoking"),
            ProductLine::Vape => write!(f, "vape"),
        }
    }
}

impl FromStr for ProductLine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "smoking" | "smoke" | "cigarette" | "cigarettes" => Ok(ProductLine::Smoking),
            "vape" | "vaping" => Ok(ProductLine::Vape),
            other => Err(format!("Unknown product line: {}. Use: smoking, vape", other)),
        }
    }
}

/// Six ordered severity levels, lowest risk first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    SafeMonitoring,
    Monitoring,
    Elevated,
    High,
    Critical,
    Emergency,
}

impl RiskTier {
    pub fn all() -> &'static [RiskTier; TIER_COUNT] {
        &[
            RiskTier::SafeMonitoring,
            RiskTier::Monitoring,
            RiskTier::Elevated,
            RiskTier::High,
            RiskTier::Critical,
            RiskTier::Emergency,
        ]
    }

    /// Position in the ordered table (0 = lowest risk)
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskTier::SafeMonitoring => write!(f, "Safe / Monitoring"),
            RiskTier::Monitoring => write!(f, "Monitoring"),
            RiskTier::Elevated => write!(f, "Elevated"),
            RiskTier::High => write!(f, "High"),
            RiskTier::Critical => write!(f, "Critical"),
            RiskTier::Emergency => write!(f, "Emergency"),
        }
    }
}

/// Which metric of a reading a range applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Chemical,
    Nicotine,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Chemical => write!(f, "chemical"),
            Dimension::Nicotine => write!(f, "nicotine"),
        }
    }
}

/// Printed value range of a tier, `min` to `max` inclusive
///
/// The highest tier uses `f64::INFINITY` as its max, serialized as `null`
/// (no upper bound). Lookup only uses `min`; see `TierTable::find_index`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierRange {
    pub min: f64,
    #[serde(serialize_with = "serialize_max")]
    pub max: f64,
}

fn serialize_max<S: Serializer>(max: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if max.is_infinite() {
        serializer.serialize_none()
    } else {
        serializer.serialize_f64(*max)
    }
}

impl TierRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub const fn unbounded(min: f64) -> Self {
        Self {
            min,
            max: f64::INFINITY,
        }
    }

    /// NaN never matches.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn is_unbounded(&self) -> bool {
        self.max == f64::INFINITY
    }
}

impl fmt::Display for TierRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unbounded() {
            write!(f, "{}+", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

/// One row of a tier table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierDefinition {
    pub tier: RiskTier,
    pub chemical_range: TierRange,
    pub nicotine_range: TierRange,
    pub label: &'static str,
    pub health_impact: &'static str,
    pub addiction_impact: &'static str,
}

impl TierDefinition {
    pub fn range(&self, dimension: Dimension) -> &TierRange {
        match dimension {
            Dimension::Chemical => &self.chemical_range,
            Dimension::Nicotine => &self.nicotine_range,
        }
    }
}

/// Ordered tier definitions for one product line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierTable {
    pub product: ProductLine,
    pub tiers: [TierDefinition; TIER_COUNT],
}

impl TierTable {
    /// Index of the highest tier whose `min` for `dimension` is at or below `value`
    ///
    /// Tier `i` covers `min_i <= v < min_(i+1)`, so a fractional value between
    /// one tier's printed max and the next tier's min stays in the lower tier.
    /// Negative values and NaN match nothing.
    pub fn find_index(&self, dimension: Dimension, value: f64) -> Option<usize> {
        self.tiers
            .iter()
            .rposition(|t| value >= t.range(dimension).min)
    }

    pub fn get(&self, tier: RiskTier) -> &TierDefinition {
        &self.tiers[tier.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &TierDefinition> {
        self.tiers.iter()
    }
}
