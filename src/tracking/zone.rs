//! Daily zone status from the number of cigarettes smoked today

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DailyZone {
    Green,
    Yellow,
    Orange,
    Red,
}

impl DailyZone {
    /// Green up to 3 sticks, yellow up to 6, orange up to 10, red above
    pub fn from_sticks(sticks: u32) -> Self {
        match sticks {
            0..=3 => DailyZone::Green,
            4..=6 => DailyZone::Yellow,
            7..=10 => DailyZone::Orange,
            _ => DailyZone::Red,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DailyZone::Green => "Safe Zone",
            DailyZone::Yellow => "Caution Zone",
            DailyZone::Orange => "Warning Zone",
            DailyZone::Red => "Danger Zone",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DailyZone::Green => "Great job! Keep up the good work.",
            DailyZone::Yellow => "You're approaching your limit.",
            DailyZone::Orange => "Consider slowing down today.",
            DailyZone::Red => "You've exceeded your daily goal.",
        }
    }
}

impl fmt::Display for DailyZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
