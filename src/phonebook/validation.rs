//! Field validators.
//!
//! These run wherever raw text enters the system: CLI argument parsing, CSV rows,
//! the persisted state file, and every `Contact` constructor or setter. Each
//! validator hands back its input untouched when it passes.

use crate::error::ValidationError;
use crate::model::ContactField;
use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\([0-9]{3}\) [0-9]{3}-[0-9]{4}$").expect("Failed to compile phone regex")
});

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("Failed to compile email regex")
});

/// Accepts exactly `(###) ###-####`.
pub fn validate_phone(phone: &str) -> Result<&str, ValidationError> {
    if PHONE_REGEX.is_match(phone) {
        Ok(phone)
    } else {
        Err(ValidationError::InvalidPhone(phone.to_string()))
    }
}

/// Accepts `local@domain.tld` where the local part and domain are word
/// characters, dots and hyphens.
pub fn validate_email(email: &str) -> Result<&str, ValidationError> {
    if EMAIL_REGEX.is_match(email) {
        Ok(email)
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

/// Names must contain something other than whitespace.
pub fn validate_name(field: ContactField, name: &str) -> Result<&str, ValidationError> {
    if name.trim().is_empty() {
        Err(ValidationError::EmptyField(field))
    } else {
        Ok(name)
    }
}

/// Blank optional text means "absent".
pub(crate) fn normalize_optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Validates an optional email after blank values have been normalized away.
pub(crate) fn validate_optional_email(
    email: Option<String>,
) -> Result<Option<String>, ValidationError> {
    match normalize_optional(email) {
        Some(email) => {
            validate_email(&email)?;
            Ok(Some(email))
        }
        None => Ok(None),
    }
}
