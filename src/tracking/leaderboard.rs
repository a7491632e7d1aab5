//! Leaderboard entries and ranking display
//!
//! Rankings come from the backend already ordered; this module decides medals
//! and which row belongs to the signed-in user.

use crate::lenient::lenient_f64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which intake a leaderboard ranks (lowest first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardKind {
    Tar,
    Nicotine,
}

impl LeaderboardKind {
    /// Value of the `type` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaderboardKind::Tar => "tar",
            LeaderboardKind::Nicotine => "nicotine",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            LeaderboardKind::Tar => "Lowest TAR Intake",
            LeaderboardKind::Nicotine => "Lowest Nicotine Intake",
        }
    }
}

impl fmt::Display for LeaderboardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LeaderboardKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tar" => Ok(LeaderboardKind::Tar),
            "nicotine" => Ok(LeaderboardKind::Nicotine),
            other => Err(format!("Unknown leaderboard: {}. Use: tar, nicotine", other)),
        }
    }
}

/// One ranked row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    #[serde(deserialize_with = "lenient_f64", default)]
    pub value: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub has_submitted_today: bool,
}

/// Identity of the signed-in user, passed to whatever needs "is this me"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub name: String,
}

impl CurrentUser {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl LeaderboardEntry {
    pub fn is_current_user(&self, user: &CurrentUser) -> bool {
        self.name == user.name
    }

    pub fn medal(&self) -> Option<Medal> {
        Medal::for_entry(self.rank, self.has_submitted_today)
    }
}

/// Rank badge shown next to a leaderboard row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
    Rank(u32),
}

impl Medal {
    /// No badge for users who have not logged today
    pub fn for_entry(rank: u32, has_submitted_today: bool) -> Option<Self> {
        if !has_submitted_today {
            return None;
        }
        Some(match rank {
            1 => Medal::Gold,
            2 => Medal::Silver,
            3 => Medal::Bronze,
            n => Medal::Rank(n),
        })
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Medal::Gold => write!(f, "\u{1f947}"),
            Medal::Silver => write!(f, "\u{1f948}"),
            Medal::Bronze => write!(f, "\u{1f949}"),
            Medal::Rank(n) => write!(f, "#{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medals() {
        assert_eq!(Medal::for_entry(1, true), Some(Medal::Gold));
        assert_eq!(Medal::for_entry(2, true), Some(Medal::Silver));
        assert_eq!(Medal::for_entry(3, true), Some(Medal::Bronze));
        assert_eq!(Medal::for_entry(4, true), Some(Medal::Rank(4)));
        assert_eq!(Medal::for_entry(1, false), None);
        assert_eq!(Medal::Rank(12).to_string(), "#12");
    }

    #[test]
    fn test_current_user_is_explicit() {
        let entry = LeaderboardEntry {
            rank: 2,
            name: "USR-0042".into(),
            value: 12.5,
            unit: "mg".into(),
            has_submitted_today: true,
        };

        assert!(entry.is_current_user(&CurrentUser::new("USR-0042")));
        assert!(!entry.is_current_user(&CurrentUser::new("USR-0043")));
    }

    #[test]
    fn test_entry_deserialization() {
        let json = r#"{"rank": 1, "name": "amira", "value": "8.40", "unit": "mg", "hasSubmittedToday": true}"#;
        let entry: LeaderboardEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.rank, 1);
        assert!((entry.value - 8.4).abs() < 1e-9);
        assert!(entry.has_submitted_today);
        assert_eq!(entry.medal(), Some(Medal::Gold));
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("TAR".parse::<LeaderboardKind>(), Ok(LeaderboardKind::Tar));
        assert!("cost".parse::<LeaderboardKind>().is_err());
        assert_eq!(LeaderboardKind::Nicotine.as_str(), "nicotine");
    }
}
