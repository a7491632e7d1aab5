//! Product catalog
//!
//! Cigarette brands with their per-stick nicotine and tar ranges, and the
//! vape flavors offered in the logging form.

use super::error::ValidationError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Per-stick milligram range as printed on the pack
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MgRange {
    pub min: f64,
    pub max: f64,
}

impl MgRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

impl fmt::Display for MgRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\u{2013}{}", self.min, self.max)
    }
}

impl FromStr for MgRange {
    type Err = ValidationError;

    /// Parses "0.8–1.2" (en dash, as printed) or "0.8-1.2"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidRange(s.to_string());

        let (min, max) = s
            .split_once('\u{2013}')
            .or_else(|| s.split_once('-'))
            .ok_or_else(invalid)?;
        let min: f64 = min.trim().parse().map_err(|_| invalid())?;
        let max: f64 = max.trim().parse().map_err(|_| invalid())?;

        if min < 0.0 || min > max {
            return Err(invalid());
        }
        Ok(Self { min, max })
    }
}

/// A cigarette brand variant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Brand {
    pub brand: &'static str,
    pub variant: &'static str,
    pub category: &'static str,
    pub nicotine_mg: MgRange,
    pub tar_mg: MgRange,
    pub company: &'static str,
}

/// Brand name of the catch-all entry for unlisted cigarettes
pub const OTHER_BRAND: &str = "Other";

impl Brand {
    /// Name shown in the brand picker and sent to the backend
    pub fn display_name(&self) -> String {
        if self.brand == OTHER_BRAND {
            OTHER_BRAND.to_string()
        } else {
            format!("{} - {} - {}", self.brand, self.variant, self.category)
        }
    }
}

const fn brand(
    brand: &'static str,
    variant: &'static str,
    category: &'static str,
    nicotine: (f64, f64),
    tar: (f64, f64),
    company: &'static str,
) -> Brand {
    Brand {
        brand,
        variant,
        category,
        nicotine_mg: MgRange::new(nicotine.0, nicotine.1),
        tar_mg: MgRange::new(tar.0, tar.1),
        company,
    }
}

/// Known cigarette brands; the last entry is the catch-all
pub static BRANDS: [Brand; 26] = [
    brand("Benson & Hedges", "Special Filter", "Full Flavor", (0.8, 1.2), (10.0, 14.0), "BATB"),
    brand("Benson & Hedges", "Blue Gold", "Light / Blue", (0.5, 0.8), (6.0, 10.0), "BATB"),
    brand("Benson & Hedges", "Switch / Platinum", "Switch / Capsule", (0.6, 1.0), (8.0, 12.0), "BATB"),
    brand("Gold Leaf", "JP Gold Leaf", "Full Flavor", (0.8, 1.2), (10.0, 14.0), "BATB"),
    brand("John Player", "Special", "Light / Blue", (0.5, 0.8), (6.0, 10.0), "BATB"),
    brand("John Player", "Switch", "Switch / Capsule", (0.6, 1.0), (8.0, 12.0), "BATB"),
    brand("Lucky Strike", "Original / Red", "Full Flavor", (0.8, 1.2), (10.0, 14.0), "BATB"),
    brand("Lucky Strike", "Cool Crunch / Fresh Twist", "Switch / Capsule", (0.6, 1.0), (8.0, 12.0), "BATB"),
    brand("Marlboro", "Red", "Full Flavor", (0.8, 1.2), (10.0, 14.0), "JTI"),
    brand("Marlboro", "Gold / Advance", "Light / Blue", (0.5, 0.8), (6.0, 10.0), "JTI"),
    brand("Winston", "Red", "Full Flavor", (0.8, 1.2), (10.0, 14.0), "JTI"),
    brand("Winston", "Blue", "Light / Blue", (0.5, 0.8), (6.0, 10.0), "JTI"),
    brand("Camel", "Filter", "Full Flavor", (0.8, 1.2), (10.0, 14.0), "JTI"),
    brand("Camel", "Blue", "Light / Blue", (0.5, 0.8), (6.0, 10.0), "JTI"),
    brand("Pall Mall", "Full Flavor", "Full Flavor", (0.8, 1.2), (10.0, 14.0), "BATB"),
    brand("Pall Mall", "Smooth / Blue", "Light / Blue", (0.5, 0.8), (6.0, 10.0), "BATB"),
    brand("Star", "Star Filter", "Full Flavor", (0.8, 1.2), (10.0, 14.0), "BATB"),
    brand("Derby", "Full Flavor", "Full Flavor", (0.8, 1.2), (10.0, 14.0), "BATB"),
    brand("Derby", "Style", "Light / Blue", (0.5, 0.8), (6.0, 10.0), "BATB"),
    brand("Royals", "Gold / Next", "Full Flavor", (0.8, 1.2), (10.0, 14.0), "BATB"),
    brand("Sheikh", "Sheikh Filter", "Full Flavor", (0.8, 1.2), (10.0, 14.0), "JTI"),
    brand("Navy", "Navy Regular", "Full Flavor", (0.8, 1.2), (10.0, 14.0), "JTI"),
    brand("Hollywood", "Blue / Red", "Full Flavor", (0.8, 1.2), (10.0, 14.0), "BATB"),
    brand("Pilot", "Pilot Filter", "Full Flavor", (0.8, 1.2), (10.0, 14.0), "BATB"),
    brand("Marise", "Special Blend", "Full Flavor", (0.8, 1.2), (10.0, 14.0), "Abul Khair Tobacco"),
    brand("Other", "Custom", "Unknown", (0.5, 1.2), (6.0, 14.0), "Various"),
];

/// Look up a brand by its display name
pub fn find_brand(display_name: &str) -> Option<&'static Brand> {
    BRANDS.iter().find(|b| b.display_name() == display_name)
}

/// Display names in catalog order
pub fn brand_display_names() -> Vec<String> {
    BRANDS.iter().map(Brand::display_name).collect()
}

/// Flavors offered when logging a vape session
pub const VAPE_FLAVORS: [&str; 10] = [
    "Mango",
    "Mint",
    "Strawberry",
    "Blueberry",
    "Watermelon",
    "Grape",
    "Tobacco",
    "Vanilla",
    "Mixed Fruits",
    "Other",
];

/// Flavor preselected when the user has no preference
pub const DEFAULT_VAPE_FLAVOR: &str = "Mint";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(
            BRANDS[0].display_name(),
            "Benson & Hedges - Special Filter - Full Flavor"
        );
        assert_eq!(BRANDS[BRANDS.len() - 1].display_name(), "Other");
        assert_eq!(brand_display_names().len(), BRANDS.len());
    }

    #[test]
    fn test_find_brand() {
        let marlboro = find_brand("Marlboro - Red - Full Flavor").unwrap();
        assert_eq!(marlboro.company, "JTI");
        assert_eq!(marlboro.tar_mg, MgRange::new(10.0, 14.0));

        let other = find_brand("Other").unwrap();
        assert_eq!(other.category, "Unknown");

        assert!(find_brand("Marlboro").is_none());
    }

    #[test]
    fn test_mg_range_parsing() {
        let range: MgRange = "0.8\u{2013}1.2".parse().unwrap();
        assert_eq!(range, MgRange::new(0.8, 1.2));
        assert!((range.midpoint() - 1.0).abs() < 1e-9);

        let range: MgRange = "6 - 10".parse().unwrap();
        assert_eq!(range, MgRange::new(6.0, 10.0));

        assert!("10".parse::<MgRange>().is_err());
        assert!("14-10".parse::<MgRange>().is_err());
        assert!("a-b".parse::<MgRange>().is_err());
    }

    #[test]
    fn test_catalog_ranges_are_sane() {
        for b in BRANDS.iter() {
            assert!(b.nicotine_mg.min <= b.nicotine_mg.max, "{}", b.display_name());
            assert!(b.tar_mg.min <= b.tar_mg.max, "{}", b.display_name());
        }
        assert!(VAPE_FLAVORS.contains(&DEFAULT_VAPE_FLAVOR));
    }
}
