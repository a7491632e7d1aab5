//! Validation error types for consumption tracking

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Errors raised by local validation before anything reaches the backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// User is younger than the minimum age for logging
    #[error("You must be {min_age}+ years old to use Nexhale")]
    UnderAge { min_age: u32 },

    /// Numeric field outside its allowed range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    /// Mood value not offered for this product line
    #[error("Unknown mood: {0}")]
    UnknownMood(String),

    /// Milligram range string could not be parsed
    #[error("Invalid mg range: {0}")]
    InvalidRange(String),

    /// One or more form fields failed
    #[error("{0}")]
    Form(FieldErrors),
}

/// Result type alias for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Per-field form errors, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&&'static str, &String)> {
        self.0.iter()
    }

    /// `Ok(())` when no field failed
    pub fn into_result(self) -> ValidationResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Form(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self
            .0
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}
