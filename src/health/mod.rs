//! Health-risk classification
//!
//! Maps a month of exposure (a chemical metric plus nicotine) to one of six
//! ordered risk tiers.
//!
//! ## Components
//!
//! - **Types**: readings, tiers, ranges and tables
//! - **Tables**: the static smoking (tar) and vape (CEI) tier tables
//! - **Classifier**: worst-of-two lookup, implemented once for both tables
//! - **Report**: severity styling and the rendered health report

mod classifier;
mod error;
mod report;
mod tables;
mod types;

pub use classifier::{classify, tier_index};
pub use error::TableError;
pub use report::{HealthReport, Severity};
pub use tables::{SMOKING_TIERS, VAPE_TIERS};
pub use types::{
    Dimension, ExposureReading, ProductLine, RiskTier, TierDefinition, TierRange, TierTable,
    TIER_COUNT,
};
