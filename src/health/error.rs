//! Tier table error types

use super::types::{Dimension, RiskTier};
use thiserror::Error;

/// A tier table that breaks the ordering/coverage invariant
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// Row at `position` holds the wrong tier
    #[error("Tier {tier} found at position {position}")]
    OutOfOrder { position: usize, tier: RiskTier },

    #[error("First {dimension} range starts at {min}, expected 0")]
    FirstMinNotZero { dimension: Dimension, min: f64 },

    #[error("{dimension} range of tier {tier} has min greater than max")]
    InvertedRange { dimension: Dimension, tier: RiskTier },

    /// Adjacent ranges overlap or leave a gap wider than one unit
    #[error("{dimension} range of tier {tier} ends at {max} but next tier starts at {next_min}")]
    NotContiguous {
        dimension: Dimension,
        tier: RiskTier,
        max: f64,
        next_min: f64,
    },

    #[error("Last {dimension} range must be unbounded")]
    LastTierBounded { dimension: Dimension },
}
