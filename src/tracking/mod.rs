//! Consumption tracking
//!
//! Everything the client does locally around a logged entry: the product
//! catalogs, entry and form validation, and the derived display values
//! (daily zone, quit-plan progress, leaderboard medals, mood shares).

pub mod catalog;
mod entry;
mod error;
mod leaderboard;
pub mod moods;
mod quit_plan;
mod stats;
mod validation;
mod zone;

pub use catalog::{
    brand_display_names, find_brand, Brand, MgRange, BRANDS, DEFAULT_VAPE_FLAVOR, VAPE_FLAVORS,
};
pub use entry::{
    check_age, resolve_brand_id, SmokingEntry, VapeEntry, DEFAULT_PG_PERCENTAGE,
    FALLBACK_BRAND_ID, MAX_STICKS, MIN_AGE, MIN_STICKS, NICOTINE_PER_LIQUID_UNIT,
};
pub use error::{FieldErrors, ValidationError, ValidationResult};
pub use leaderboard::{CurrentUser, LeaderboardEntry, LeaderboardKind, Medal};
pub use moods::{find_mood, moods_by_category, moods_for, Mood, MoodCategory};
pub use quit_plan::{
    effective_limit, validate_limit, QuitPlanProgress, WeekProgress, DEFAULT_NICOTINE_LIMIT,
    MAX_NICOTINE_LIMIT, MIN_NICOTINE_LIMIT,
};
pub use stats::{mood_distribution, MoodCount, MoodShare};
pub use validation::{LoginForm, PasswordResetForm, RegistrationForm};
pub use zone::DailyZone;
