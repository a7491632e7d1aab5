//! Monthly nicotine limit tracking
//!
//! The backend stores the limit and the running total; these types derive the
//! progress figures shown next to them.

use super::error::{ValidationError, ValidationResult};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Limit used when the user has not set one (mg/month)
pub const DEFAULT_NICOTINE_LIMIT: f64 = 500.0;

pub const MIN_NICOTINE_LIMIT: f64 = 50.0;
pub const MAX_NICOTINE_LIMIT: f64 = 2000.0;

pub const WEEKS_PER_PLAN: f64 = 4.0;

/// Segments in a weekly progress bar
pub const PROGRESS_SEGMENTS: u32 = 20;

/// Check a limit before saving it
pub fn validate_limit(limit: f64) -> ValidationResult<()> {
    if !(MIN_NICOTINE_LIMIT..=MAX_NICOTINE_LIMIT).contains(&limit) {
        return Err(ValidationError::OutOfRange {
            field: "nicotine_limit",
            min: MIN_NICOTINE_LIMIT,
            max: MAX_NICOTINE_LIMIT,
            value: limit,
        });
    }
    Ok(())
}

/// Zero or missing limits fall back to the default
pub fn effective_limit(limit: Option<f64>) -> f64 {
    match limit {
        Some(l) if l > 0.0 => l,
        _ => DEFAULT_NICOTINE_LIMIT,
    }
}

fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Progress against the monthly limit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuitPlanProgress {
    pub limit: f64,
    pub consumed: f64,
    pub percent_used: u32,
    pub limit_reached: bool,
    pub days_remaining: u32,
}

impl QuitPlanProgress {
    pub fn new(limit: Option<f64>, consumed: f64, today: NaiveDate) -> Self {
        let limit = effective_limit(limit);
        let consumed = consumed.max(0.0);
        let percent_used = (consumed / limit * 100.0).round() as u32;

        Self {
            limit,
            consumed,
            percent_used,
            limit_reached: percent_used >= 100,
            days_remaining: days_in_month(today) - today.day(),
        }
    }

    pub fn remaining(&self) -> f64 {
        (self.limit - self.consumed).max(0.0)
    }
}

/// One week's share of the monthly limit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekProgress {
    pub week_num: u32,
    pub used: f64,
    pub limit: f64,
    /// Share of the weekly limit used, capped at 100
    pub percentage: f64,
    pub filled_segments: u32,
}

impl WeekProgress {
    pub fn new(week_num: u32, used: f64, monthly_limit: Option<f64>) -> Self {
        let limit = effective_limit(monthly_limit) / WEEKS_PER_PLAN;
        let percentage = (used.max(0.0) / limit * 100.0).min(100.0);
        let filled_segments = (percentage / 100.0 * PROGRESS_SEGMENTS as f64).round() as u32;

        Self {
            week_num,
            used,
            limit,
            percentage,
            filled_segments,
        }
    }

    /// Text bar such as `[#####---------------]`
    pub fn bar(&self) -> String {
        let filled = self.filled_segments.min(PROGRESS_SEGMENTS) as usize;
        let empty = PROGRESS_SEGMENTS as usize - filled;
        format!("[{}{}]", "#".repeat(filled), "-".repeat(empty))
    }
}
