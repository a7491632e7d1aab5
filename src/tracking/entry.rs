//! Consumption entries
//!
//! A logged cigarette or vape session as entered by the user, validated
//! locally and converted into the request body the backend expects.

use super::catalog::DEFAULT_VAPE_FLAVOR;
use super::error::{ValidationError, ValidationResult};
use super::moods::find_mood;
use crate::client::{RemoteBrand, SmokingLogRequest, VapeLogRequest};
use crate::health::ProductLine;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Minimum age for logging consumption
pub const MIN_AGE: u32 = 15;

/// Sticks per smoking entry
pub const MIN_STICKS: u32 = 1;
pub const MAX_STICKS: u32 = 50;

/// Estimated nicotine per unit of e-liquid (mg)
pub const NICOTINE_PER_LIQUID_UNIT: f64 = 20.0;

pub const DEFAULT_PG_PERCENTAGE: u8 = 50;

/// Backend brand id used when the selected brand is not in its list
pub const FALLBACK_BRAND_ID: i64 = 1;

/// Reject users below `MIN_AGE`
pub fn check_age(age: u32) -> ValidationResult<()> {
    if age < MIN_AGE {
        return Err(ValidationError::UnderAge { min_age: MIN_AGE });
    }
    Ok(())
}

fn check_mood(product: ProductLine, mood: Option<&str>) -> ValidationResult<()> {
    match mood {
        Some(value) if !value.is_empty() && find_mood(product, value).is_none() => {
            Err(ValidationError::UnknownMood(value.to_string()))
        }
        _ => Ok(()),
    }
}

/// Backend id for a brand display name
pub fn resolve_brand_id(brands: &[RemoteBrand], display_name: &str) -> i64 {
    brands
        .iter()
        .find(|b| b.display_name == display_name)
        .map(|b| b.id)
        .unwrap_or(FALLBACK_BRAND_ID)
}

/// Cigarettes smoked in one sitting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmokingEntry {
    /// Brand display name
    pub brand: String,
    pub sticks: u32,
    pub price_per_stick: f64,
    #[serde(default)]
    pub mood: Option<String>,
}

impl SmokingEntry {
    pub fn new(brand: impl Into<String>, sticks: u32) -> Self {
        Self {
            brand: brand.into(),
            sticks,
            price_per_stick: 0.0,
            mood: None,
        }
    }

    /// Builder: set price per stick
    pub fn price(mut self, price_per_stick: f64) -> Self {
        self.price_per_stick = price_per_stick;
        self
    }

    /// Builder: set mood value
    pub fn mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = Some(mood.into());
        self
    }

    pub fn cost(&self) -> f64 {
        self.sticks as f64 * self.price_per_stick
    }

    pub fn validate(&self) -> ValidationResult<()> {
        if !(MIN_STICKS..=MAX_STICKS).contains(&self.sticks) {
            return Err(ValidationError::OutOfRange {
                field: "sticks",
                min: MIN_STICKS as f64,
                max: MAX_STICKS as f64,
                value: self.sticks as f64,
            });
        }
        if !(self.price_per_stick.is_finite() && self.price_per_stick >= 0.0) {
            return Err(ValidationError::OutOfRange {
                field: "price_per_stick",
                min: 0.0,
                max: f64::MAX,
                value: self.price_per_stick,
            });
        }
        check_mood(ProductLine::Smoking, self.mood.as_deref())
    }

    /// Validate and build the log request for `date`
    pub fn into_request(
        self,
        date: NaiveDate,
        brands: &[RemoteBrand],
    ) -> ValidationResult<SmokingLogRequest> {
        self.validate()?;
        Ok(SmokingLogRequest {
            date,
            cigarette_count: self.sticks,
            brand_id: resolve_brand_id(brands, &self.brand),
            cost: self.cost(),
            mood: self.mood.filter(|m| !m.is_empty()),
        })
    }
}

/// One vaping session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VapeEntry {
    pub puffs: u32,
    pub liquid_amount: f64,
    pub flavor: String,
    pub pg_percentage: u8,
    #[serde(default)]
    pub mood: Option<String>,
}

impl VapeEntry {
    pub fn new(puffs: u32, liquid_amount: f64) -> Self {
        Self {
            puffs,
            liquid_amount,
            flavor: DEFAULT_VAPE_FLAVOR.to_string(),
            pg_percentage: DEFAULT_PG_PERCENTAGE,
            mood: None,
        }
    }

    /// Builder: set flavor
    pub fn flavor(mut self, flavor: impl Into<String>) -> Self {
        self.flavor = flavor.into();
        self
    }

    /// Builder: set propylene glycol share (0-100)
    pub fn pg(mut self, pg_percentage: u8) -> Self {
        self.pg_percentage = pg_percentage;
        self
    }

    /// Builder: set mood value
    pub fn mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = Some(mood.into());
        self
    }

    /// Estimated nicotine for this session (mg)
    pub fn nicotine_amount(&self) -> f64 {
        self.liquid_amount * NICOTINE_PER_LIQUID_UNIT
    }

    pub fn validate(&self) -> ValidationResult<()> {
        if self.puffs < 1 {
            return Err(ValidationError::OutOfRange {
                field: "puffs",
                min: 1.0,
                max: u32::MAX as f64,
                value: self.puffs as f64,
            });
        }
        if !(self.liquid_amount.is_finite() && self.liquid_amount >= 0.0) {
            return Err(ValidationError::OutOfRange {
                field: "liquid_amount",
                min: 0.0,
                max: f64::MAX,
                value: self.liquid_amount,
            });
        }
        if self.pg_percentage > 100 {
            return Err(ValidationError::OutOfRange {
                field: "pg_percentage",
                min: 0.0,
                max: 100.0,
                value: self.pg_percentage as f64,
            });
        }
        check_mood(ProductLine::Vape, self.mood.as_deref())
    }

    /// Validate and build the log request for `date`
    pub fn into_request(self, date: NaiveDate) -> ValidationResult<VapeLogRequest> {
        self.validate()?;
        let nicotine_amount = self.nicotine_amount();
        Ok(VapeLogRequest {
            date,
            puffs: self.puffs,
            liquid_amount: self.liquid_amount,
            flavor: self.flavor,
            pg_percentage: self.pg_percentage,
            nicotine_amount,
            mood: self.mood.filter(|m| !m.is_empty()),
        })
    }
}
