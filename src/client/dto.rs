//! Request and response bodies for the Nexhale backend
//!
//! Field names follow the backend's JSON. Numeric totals sometimes arrive as
//! strings ("12.50"), so they go through `lenient_f64`.

use crate::health::ExposureReading;
use crate::lenient::lenient_f64;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================
// Auth
// ============================================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login/registration result
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthResponse {
    pub token: String,
    /// User fields returned alongside the token
    #[serde(flatten)]
    pub user: HashMap<String, serde_json::Value>,
}

// ============================================
// Stats
// ============================================

/// Month/year filter for summary and weekly stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthSelector {
    pub month: u32,
    pub year: i32,
}

/// `/stats/summary`: totals for the current (or selected) month and today
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsSummary {
    #[serde(deserialize_with = "lenient_f64")]
    pub daily_cigarettes: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub daily_tar: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_cost: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_nicotine: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_tar: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_chemical: f64,
    #[serde(rename = "totalVapeCEI", deserialize_with = "lenient_f64")]
    pub total_vape_cei: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_puffs: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_liquid: f64,
    pub daily_zone: Option<String>,
}

impl StatsSummary {
    /// Monthly tar and nicotine
    pub fn smoking_reading(&self) -> ExposureReading {
        ExposureReading::new(self.total_tar, self.total_nicotine)
    }

    /// Monthly chemical exposure index and nicotine
    pub fn vape_reading(&self) -> ExposureReading {
        ExposureReading::new(self.total_chemical, self.total_nicotine)
    }

    /// Sticks smoked today, as a whole count
    pub fn cigarettes_today(&self) -> u32 {
        self.daily_cigarettes.max(0.0).round() as u32
    }
}

/// One point of the daily/weekly/monthly intake series
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct IntakePoint {
    pub name: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub nicotine: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub tar: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub chemical: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthDetail {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

/// `/stats/health`: the backend's own health summary
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthStats {
    pub risk_tier: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub risk_percentage: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub nicotine_intake: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub tar_intake: f64,
    pub details: Vec<HealthDetail>,
}

impl HealthStats {
    pub fn detail(&self, kind: &str) -> Option<&str> {
        self.details
            .iter()
            .find(|d| d.kind == kind)
            .map(|d| d.description.as_str())
    }
}

// ============================================
// Quit plan
// ============================================

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QuitPlan {
    #[serde(default)]
    pub nicotine_limit: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeeklyTotal {
    pub week_num: u32,
    #[serde(deserialize_with = "lenient_f64", default)]
    pub week_total: f64,
}

/// `/quit-plan`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuitPlanResponse {
    pub plan: Option<QuitPlan>,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_consumed: f64,
    pub weekly_progress: Vec<WeeklyTotal>,
}

impl QuitPlanResponse {
    pub fn nicotine_limit(&self) -> Option<f64> {
        self.plan.as_ref().and_then(|p| p.nicotine_limit)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetQuitPlanRequest {
    pub nicotine_limit: f64,
}

// ============================================
// Logging
// ============================================

/// Body of `/quit-plan/log`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmokingLogRequest {
    pub date: NaiveDate,
    pub cigarette_count: u32,
    pub brand_id: i64,
    pub cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
}

/// Body of `/quit-plan/log-vape`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VapeLogRequest {
    pub date: NaiveDate,
    pub puffs: u32,
    pub liquid_amount: f64,
    pub flavor: String,
    pub pg_percentage: u8,
    pub nicotine_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
}

/// Brand as listed by `/brands`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteBrand {
    pub id: i64,
    pub display_name: String,
}

// ============================================
// Profile
// ============================================

/// `/user/profile`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct UserProfile {
    pub user_name: String,
    pub email: String,
    pub age: Option<u32>,
    pub preferred_brand: Option<String>,
    pub preferred_vape_flavor: Option<String>,
    pub preferred_vape_liquid_amount: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub username: String,
    pub preferred_brand: Option<String>,
    pub preferred_vape_flavor: Option<String>,
    pub preferred_vape_liquid_amount: Option<String>,
}

impl From<&UserProfile> for UpdateProfileRequest {
    fn from(profile: &UserProfile) -> Self {
        Self {
            username: profile.user_name.clone(),
            preferred_brand: profile.preferred_brand.clone(),
            preferred_vape_flavor: profile.preferred_vape_flavor.clone(),
            preferred_vape_liquid_amount: profile.preferred_vape_liquid_amount.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEmailRequest {
    pub new_email: String,
    pub password: String,
}

/// Error body returned by the backend on failure
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(alias = "error")]
    pub message: Option<String>,
}
