//! Client-side figures derived from backend statistics

use crate::lenient::lenient_u64;
use serde::{Deserialize, Serialize};

/// How often a mood was logged, as returned by `/stats/moods`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MoodCount {
    pub mood: String,
    #[serde(deserialize_with = "lenient_u64", default)]
    pub count: u64,
}

/// A mood's share of all logged moods
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodShare {
    pub mood: String,
    /// Whole percent, rounded
    pub percent: u32,
}

/// Percentage share per mood, in input order
///
/// Shares are rounded individually, so they may not sum to exactly 100.
pub fn mood_distribution(counts: &[MoodCount]) -> Vec<MoodShare> {
    let total: u64 = counts.iter().map(|m| m.count).sum();

    counts
        .iter()
        .map(|m| MoodShare {
            mood: m.mood.clone(),
            percent: if total > 0 {
                (m.count as f64 / total as f64 * 100.0).round() as u32
            } else {
                0
            },
        })
        .collect()
}
