//! Date-like and phone-number-like substring detection.

use crate::error::{ValidationFailure, ValidationResult};
use password_policy_common::{PatternKind, PolicyConfig};
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

// Unanchored: a match anywhere in the password counts.
static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"[0-9]{1,4}[-./][0-9]{1,2}[-./][0-9]{1,4}")
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .expect("date pattern is valid")
});
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{3}[-.][0-9]{3}[-.][0-9]{4}").expect("phone pattern is valid"));

/// Whether the password contains something shaped like a numeric date
pub fn contains_date(password: &str) -> bool {
    DATE_REGEX.is_match(password)
}

/// Whether the password contains something shaped like a phone number
pub fn contains_phone_number(password: &str) -> bool {
    PHONE_REGEX.is_match(password)
}

/// Reject dates unless the policy allows them
pub fn validate_dates(password: &str, policy: &PolicyConfig) -> ValidationResult<()> {
    if !policy.allow_dates && contains_date(password) {
        return Err(ValidationFailure::ForbiddenPattern {
            kind: PatternKind::Date,
        });
    }
    Ok(())
}

/// Reject phone numbers unless the policy allows them
pub fn validate_phone_numbers(password: &str, policy: &PolicyConfig) -> ValidationResult<()> {
    if !policy.allow_phone_numbers && contains_phone_number(password) {
        return Err(ValidationFailure::ForbiddenPattern {
            kind: PatternKind::Phone,
        });
    }
    Ok(())
}
