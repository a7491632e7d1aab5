//! Lenient number deserializers
//!
//! Backend totals and counts sometimes arrive as JSON strings ("12.50") or
//! null. These read them the way `parseFloat(x) || 0` would.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
    Null,
}

/// Number, numeric string, or null; anything unparseable or non-finite reads as 0
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => n,
        NumberOrString::Text(s) => s.trim().parse().unwrap_or(0.0),
        NumberOrString::Null => 0.0,
    };
    // "NaN", "inf" and "infinity" parse successfully in Rust
    Ok(if value.is_finite() { value } else { 0.0 })
}

/// Counts that may arrive as strings; negative or unparseable reads as 0
pub(crate) fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = lenient_f64(deserializer)?;
    Ok(if value > 0.0 { value.round() as u64 } else { 0 })
}
