//! Entity invariant checks shared by the entity constructors.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// The part after the last `@` must contain a dot.
static EMAIL_DOMAIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@[^@]*\.[^@]*$").expect("valid email regex"));

/// An entity invariant was violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub type ValidationResult<T = ()> = Result<T, ValidationError>;

pub(crate) fn max_chars(field: &'static str, value: &str, max: usize, label: &str) -> ValidationResult {
    if value.chars().count() > max {
        return Err(ValidationError::new(
            field,
            format!("{label} must be at most {max} characters"),
        ));
    }
    Ok(())
}

pub(crate) fn not_blank(field: &'static str, value: &str, label: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, format!("{label} cannot be empty")));
    }
    Ok(())
}

pub(crate) fn email(value: &str) -> ValidationResult {
    if !value.contains('@') {
        return Err(ValidationError::new("email", "Invalid email format"));
    }
    if !EMAIL_DOMAIN_REGEX.is_match(value) {
        return Err(ValidationError::new(
            "email",
            "Email must contain domain with .",
        ));
    }
    Ok(())
}

/// Inclusive range check; NaN is always out of range.
pub(crate) fn in_range(field: &'static str, value: f64, min: f64, max: f64, label: &str) -> ValidationResult {
    if !(min..=max).contains(&value) {
        return Err(ValidationError::new(
            field,
            format!("{label} must be between {min} and {max}"),
        ));
    }
    Ok(())
}

pub(crate) fn rating(value: i64) -> ValidationResult<u8> {
    if !(1..=5).contains(&value) {
        return Err(ValidationError::new(
            "rating",
            "Rating must be between 1 and 5",
        ));
    }
    Ok(value as u8)
}
