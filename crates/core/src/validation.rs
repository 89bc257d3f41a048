//! Input validation helpers shared by the account lifecycle and the
//! resource CRUD handlers.
//!
//! The password policy is intentionally narrow: exactly 10 numeric digits,
//! matching the national-id format the rest of the system uses.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

static PASSWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("valid regex"));

static NATIONAL_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{10}$").expect("valid regex"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?\d{7,15}$").expect("valid regex"));

/// Trim surrounding whitespace and lower-case an email for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Enforce the fixed password policy: exactly 10 numeric digits.
pub fn validate_password(password: &str) -> Result<(), CoreError> {
    if !PASSWORD_RE.is_match(password) {
        return Err(CoreError::Validation(
            "Password must be exactly 10 numeric digits".into(),
        ));
    }
    Ok(())
}

/// National ids are exactly 10 digits.
pub fn validate_national_id(national_id: &str) -> Result<(), CoreError> {
    if !NATIONAL_ID_RE.is_match(national_id) {
        return Err(CoreError::Validation(
            "National id must be exactly 10 digits".into(),
        ));
    }
    Ok(())
}

/// Basic email shape check (local@domain.tld, no whitespace).
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if !EMAIL_RE.is_match(email) {
        return Err(CoreError::Validation(format!("Invalid email: {email}")));
    }
    Ok(())
}

/// Phone numbers: optional leading `+`, then 7 to 15 digits.
pub fn validate_phone(phone: &str) -> Result<(), CoreError> {
    if !PHONE_RE.is_match(phone) {
        return Err(CoreError::Validation(format!("Invalid phone: {phone}")));
    }
    Ok(())
}

/// Require a non-empty value after trimming, returning the trimmed string.
pub fn require_trimmed(field: &'static str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}
