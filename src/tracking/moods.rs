//! Mood catalogs
//!
//! Moods a user can attach to a logged entry. Smoking and vaping offer
//! different lists; vaping adds a social category.

use crate::health::ProductLine;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodCategory {
    Emotional,
    Situational,
    Physical,
    Social,
}

impl MoodCategory {
    pub fn all() -> &'static [MoodCategory] {
        &[
            MoodCategory::Emotional,
            MoodCategory::Situational,
            MoodCategory::Physical,
            MoodCategory::Social,
        ]
    }
}

impl fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoodCategory::Emotional => write!(f, "emotional"),
            MoodCategory::Situational => write!(f, "situational"),
            MoodCategory::Physical => write!(f, "physical"),
            MoodCategory::Social => write!(f, "social"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mood {
    /// Value sent to the backend
    pub value: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
    pub category: MoodCategory,
}

impl Mood {
    /// "emoji label", as shown in a picker
    pub fn option_label(&self) -> String {
        format!("{} {}", self.emoji, self.label)
    }
}

const fn mood(
    value: &'static str,
    label: &'static str,
    emoji: &'static str,
    category: MoodCategory,
) -> Mood {
    Mood {
        value,
        label,
        emoji,
        category,
    }
}

pub static SMOKING_MOODS: [Mood; 21] = [
    mood("relaxed", "Relaxed", "😌", MoodCategory::Emotional),
    mood("stressed", "Stressed", "😰", MoodCategory::Emotional),
    mood("anxious", "Anxious", "😟", MoodCategory::Emotional),
    mood("sad", "Sad", "😔", MoodCategory::Emotional),
    mood("frustrated", "Frustrated", "😤", MoodCategory::Emotional),
    mood("happy", "Happy", "😊", MoodCategory::Emotional),
    mood("bored", "Bored", "😐", MoodCategory::Emotional),
    mood("numb", "Numb", "😶", MoodCategory::Emotional),
    mood("with-coffee", "With Coffee", "☕", MoodCategory::Situational),
    mood("drinking", "Drinking", "🍺", MoodCategory::Situational),
    mood("social", "Social / Party", "🎉", MoodCategory::Situational),
    mood("work-break", "Work Break", "💼", MoodCategory::Situational),
    mood("driving", "Driving", "🚗", MoodCategory::Situational),
    mood("after-call", "After Phone Call", "📱", MoodCategory::Situational),
    mood("after-meal", "After Meal", "🍽️", MoodCategory::Situational),
    mood("late-night", "Late Night", "🌙", MoodCategory::Situational),
    mood("tired", "Tired", "😴", MoodCategory::Physical),
    mood("nauseous", "Nauseous", "🤢", MoodCategory::Physical),
    mood("headache", "Headache", "🤕", MoodCategory::Physical),
    mood("craving", "Craving", "💪", MoodCategory::Physical),
    mood("need-break", "Need a Break", "😮‍💨", MoodCategory::Physical),
];

pub static VAPE_MOODS: [Mood; 33] = [
    mood("relaxed", "Relaxed", "😌", MoodCategory::Emotional),
    mood("stressed", "Stressed", "😰", MoodCategory::Emotional),
    mood("happy", "Happy", "😊", MoodCategory::Emotional),
    mood("anxious", "Anxious", "😟", MoodCategory::Emotional),
    mood("sad", "Sad", "😢", MoodCategory::Emotional),
    mood("frustrated", "Frustrated", "😤", MoodCategory::Emotional),
    mood("excited", "Excited", "🤩", MoodCategory::Emotional),
    mood("calm", "Calm", "😇", MoodCategory::Emotional),
    mood("irritated", "Irritated", "😠", MoodCategory::Emotional),
    mood("content", "Content", "🙂", MoodCategory::Emotional),
    mood("after_meal", "After Meal", "🍽️", MoodCategory::Situational),
    mood("with_coffee", "With Coffee", "☕", MoodCategory::Situational),
    mood("on_break", "On Break", "⏸️", MoodCategory::Situational),
    mood("while_driving", "While Driving", "🚗", MoodCategory::Situational),
    mood("while_working", "While Working", "💼", MoodCategory::Situational),
    mood("while_gaming", "While Gaming", "🎮", MoodCategory::Situational),
    mood("watching_tv", "Watching TV", "📺", MoodCategory::Situational),
    mood("before_sleep", "Before Sleep", "🌙", MoodCategory::Situational),
    mood("morning_routine", "Morning Routine", "🌅", MoodCategory::Situational),
    mood("after_exercise", "After Exercise", "🏃", MoodCategory::Situational),
    mood("craving", "Craving", "🔥", MoodCategory::Physical),
    mood("tired", "Tired", "😴", MoodCategory::Physical),
    mood("bored", "Bored", "😐", MoodCategory::Physical),
    mood("restless", "Restless", "🥴", MoodCategory::Physical),
    mood("headache", "Headache", "🤕", MoodCategory::Physical),
    mood("throat_dry", "Throat Dry", "💧", MoodCategory::Physical),
    mood("energized", "Energized", "⚡", MoodCategory::Physical),
    mood("nauseous", "Nauseous", "🤢", MoodCategory::Physical),
    mood("with_friends", "With Friends", "👥", MoodCategory::Social),
    mood("at_party", "At Party", "🎉", MoodCategory::Social),
    mood("alone", "Alone", "🧍", MoodCategory::Social),
    mood("socializing", "Socializing", "💬", MoodCategory::Social),
    mood("celebrating", "Celebrating", "🥳", MoodCategory::Social),
];

/// Mood list for a product line
pub fn moods_for(product: ProductLine) -> &'static [Mood] {
    match product {
        ProductLine::Smoking => &SMOKING_MOODS,
        ProductLine::Vape => &VAPE_MOODS,
    }
}

/// Find a mood by its backend value
pub fn find_mood(product: ProductLine, value: &str) -> Option<&'static Mood> {
    moods_for(product).iter().find(|m| m.value == value)
}

/// Moods grouped by category, in category order; empty categories omitted
pub fn moods_by_category(product: ProductLine) -> Vec<(MoodCategory, Vec<&'static Mood>)> {
    let moods = moods_for(product);
    MoodCategory::all()
        .iter()
        .map(|cat| (*cat, moods.iter().filter(|m| m.category == *cat).collect::<Vec<_>>()))
        .filter(|(_, group)| !group.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smoking_has_no_social_moods() {
        let groups = moods_by_category(ProductLine::Smoking);
        let categories: Vec<MoodCategory> = groups.iter().map(|(c, _)| *c).collect();

        assert_eq!(
            categories,
            vec![
                MoodCategory::Emotional,
                MoodCategory::Situational,
                MoodCategory::Physical
            ]
        );
        assert_eq!(groups[0].1.len(), 8);
    }

    #[test]
    fn test_vape_groups() {
        let groups = moods_by_category(ProductLine::Vape);
        assert_eq!(groups.len(), 4);

        let total: usize = groups.iter().map(|(_, g)| g.len()).sum();
        assert_eq!(total, VAPE_MOODS.len());
        assert_eq!(groups[3].0, MoodCategory::Social);
    }

    #[test]
    fn test_find_mood() {
        let mood = find_mood(ProductLine::Smoking, "with-coffee").unwrap();
        assert_eq!(mood.label, "With Coffee");
        assert_eq!(mood.category, MoodCategory::Situational);

        // Vape values use underscores
        assert!(find_mood(ProductLine::Vape, "with-coffee").is_none());
        assert!(find_mood(ProductLine::Vape, "with_coffee").is_some());
    }

    #[test]
    fn test_option_label() {
        let mood = find_mood(ProductLine::Vape, "craving").unwrap();
        assert_eq!(mood.option_label(), "\u{1f525} Craving");
    }
}
