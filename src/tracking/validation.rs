//! Authentication form validation
//!
//! Checks login, registration and password-reset input locally so the user
//! gets per-field messages before any request is sent.

use super::entry::MIN_AGE;
use super::error::{FieldErrors, ValidationResult};
use regex::Regex;
use std::sync::OnceLock;

/// Minimum password length for login, registration and reset
pub const MIN_PASSWORD_LEN: usize = 6;

/// Length of the emailed verification code
pub const RESET_CODE_LEN: usize = 6;

fn is_valid_email(email: &str) -> bool {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"\S+@\S+\.\S+").ok())
        .as_ref()
        .map(|re| re.is_match(email))
        .unwrap_or(false)
}

fn check_email(errors: &mut FieldErrors, field: &'static str, email: &str) {
    if email.is_empty() {
        errors.add(field, "Email is required");
    } else if !is_valid_email(email) {
        errors.add(field, "Please enter a valid email");
    }
}

fn check_password(errors: &mut FieldErrors, field: &'static str, password: &str, label: &str) {
    if password.is_empty() {
        errors.add(field, format!("{} is required", label));
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.add(
            field,
            format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
        );
    }
}

/// Email and password sign-in
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> ValidationResult<()> {
        let mut errors = FieldErrors::new();
        check_email(&mut errors, "email", &self.email);
        check_password(&mut errors, "password", &self.password, "Password");
        errors.into_result()
    }
}

/// New account sign-up
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: Option<u32>,
    pub preferred_brand: Option<String>,
}

impl RegistrationForm {
    pub fn validate(&self) -> ValidationResult<()> {
        let mut errors = FieldErrors::new();
        check_email(&mut errors, "email", &self.email);
        check_password(&mut errors, "password", &self.password, "Password");

        if self.name.trim().is_empty() {
            errors.add("name", "Name is required");
        }

        match self.age {
            None => errors.add("age", "Age is required"),
            Some(age) if age < MIN_AGE => {
                errors.add("age", format!("You must be {} or older", MIN_AGE))
            }
            Some(_) => {}
        }

        if self.preferred_brand.as_deref().map_or(true, str::is_empty) {
            errors.add("preferred_brand", "Please select your preferred brand");
        }

        errors.into_result()
    }
}

/// Forgotten-password flow: email, then code, then the new password
#[derive(Debug, Clone, Default)]
pub struct PasswordResetForm {
    pub email: String,
    pub code: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordResetForm {
    /// First step: the account email
    pub fn validate_email(&self) -> ValidationResult<()> {
        let mut errors = FieldErrors::new();
        check_email(&mut errors, "email", &self.email);
        errors.into_result()
    }

    /// Second step: the verification code
    pub fn validate_code(&self) -> ValidationResult<()> {
        let mut errors = FieldErrors::new();
        if self.code.is_empty() {
            errors.add("code", "Verification code is required");
        } else if self.code.chars().count() != RESET_CODE_LEN {
            errors.add("code", format!("Code must be {} digits", RESET_CODE_LEN));
        }
        errors.into_result()
    }

    /// Final step: new password and its confirmation
    pub fn validate_new_password(&self) -> ValidationResult<()> {
        let mut errors = FieldErrors::new();
        check_password(&mut errors, "new_password", &self.new_password, "New password");

        if self.confirm_password.is_empty() {
            errors.add("confirm_password", "Please confirm your password");
        } else if self.new_password != self.confirm_password {
            errors.add("confirm_password", "Passwords do not match");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::error::ValidationError;

    fn field_errors(result: ValidationResult<()>) -> FieldErrors {
        match result {
            Err(ValidationError::Form(errors)) => errors,
            other => panic!("expected form errors, got {:?}", other),
        }
    }

    #[test]
    fn test_login_valid() {
        let form = LoginForm {
            email: "user@example.com".into(),
            password: "secret1".into(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_login_errors() {
        let errors = field_errors(LoginForm::default().validate());
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));

        let form = LoginForm {
            email: "not-an-email".into(),
            password: "12345".into(),
        };
        let errors = field_errors(form.validate());
        assert_eq!(errors.get("email"), Some("Please enter a valid email"));
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn test_registration_requires_age_and_brand() {
        let form = RegistrationForm {
            name: "Rafi".into(),
            email: "rafi@example.com".into(),
            password: "hunter22".into(),
            age: Some(14),
            preferred_brand: None,
        };
        let errors = field_errors(form.validate());

        assert_eq!(errors.get("age"), Some("You must be 15 or older"));
        assert_eq!(
            errors.get("preferred_brand"),
            Some("Please select your preferred brand")
        );
        assert_eq!(errors.get("name"), None);
    }

    #[test]
    fn test_registration_valid() {
        let form = RegistrationForm {
            name: "Rafi".into(),
            email: "rafi@example.com".into(),
            password: "hunter22".into(),
            age: Some(15),
            preferred_brand: Some("Marlboro - Red - Full Flavor".into()),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_reset_flow() {
        let mut form = PasswordResetForm {
            email: "user@example.com".into(),
            code: "12345".into(),
            ..Default::default()
        };
        assert!(form.validate_email().is_ok());

        let errors = field_errors(form.validate_code());
        assert_eq!(errors.get("code"), Some("Code must be 6 digits"));

        form.code = "123456".into();
        assert!(form.validate_code().is_ok());

        form.new_password = "newpass".into();
        form.confirm_password = "newpasx".into();
        let errors = field_errors(form.validate_new_password());
        assert_eq!(errors.get("confirm_password"), Some("Passwords do not match"));

        form.confirm_password = "newpass".into();
        assert!(form.validate_new_password().is_ok());
    }
}
