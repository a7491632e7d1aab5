//! # Nexhale
//!
//! Client library for a tobacco and vape consumption tracker: monthly exposure
//! risk classification, local validation of logged entries, and a typed client
//! for the Nexhale backend.
//!
//! ## Modules
//!
//! - [`health`]: six-tier risk classification of monthly chemical and nicotine exposure
//! - [`tracking`]: product catalogs, entry and form validation, derived progress figures
//! - [`client`]: async REST client for the backend
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use nexhale::health::{classify, ExposureReading, RiskTier, SMOKING_TIERS};
//!
//! // A month of 5000 mg tar and 100 mg nicotine
//! let tier = classify(&SMOKING_TIERS, &ExposureReading::new(5000.0, 100.0));
//!
//! assert_eq!(tier.tier, RiskTier::High);
//! println!("{}: {}", tier.label, tier.health_impact);
//! ```

pub mod client;
pub mod config;
pub mod health;
mod lenient;
pub mod tracking;

// Re-export top-level types for convenience
pub use health::{
    classify, ExposureReading, HealthReport, ProductLine, RiskTier, Severity, TierDefinition,
    TierTable,
};

pub use tracking::{
    CurrentUser, DailyZone, LeaderboardKind, QuitPlanProgress, SmokingEntry, ValidationError,
    VapeEntry,
};

pub use client::{ClientConfig, ClientError, ClientResult, NexhaleClient};

pub use config::{Config, ConfigError};
