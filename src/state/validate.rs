//! Field validation rules for the contact form

use super::contact::{ContactFormData, Field, FieldErrors, ValidationError};
use regex::Regex;
use std::sync::LazyLock;

/// Accepts `local@domain.tld` shapes with no whitespace.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Validate the whole form in one pass.
///
/// Every rule is applied independently; all violations are collected
/// rather than stopping at the first. `collaboration_type`, `budget` and
/// `timeline` are never required, so no rule fires for them.
pub fn validate(data: &ContactFormData) -> FieldErrors {
    let mut errors = FieldErrors::default();

    for field in Field::ALL {
        let value = data.get(field);
        match field {
            Field::Email => {
                if value.trim().is_empty() {
                    errors.set(field, ValidationError::Required);
                } else if !EMAIL_PATTERN.is_match(value) {
                    errors.set(field, ValidationError::InvalidFormat);
                }
            }
            _ if field.is_required() => {
                if value.trim().is_empty() {
                    errors.set(field, ValidationError::Required);
                }
            }
            _ => {}
        }
    }

    errors
}
