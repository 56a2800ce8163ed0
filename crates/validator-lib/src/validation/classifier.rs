//! Character classification and the length/class-count rules.

use crate::error::{ValidationFailure, ValidationResult};
use password_policy_common::{CharClass, LengthBound, PolicyConfig};

const SPECIAL_LOW: u32 = 0x20;
const SPECIAL_HIGH: u32 = 0x7E;
const SPECIAL_HIGH_EXTENDED: u32 = 0xFF;

/// Outcome of classifying one character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharKind {
    Class(CharClass),
    Invalid,
}

/// Classify a single character.
///
/// Letters and digits are ASCII-only. Symbols cover the printable ASCII
/// range, widened to 0xFF when `extended` is set. Everything else is
/// [`CharKind::Invalid`].
pub fn classify(c: char, extended: bool) -> CharKind {
    let special_high = if extended {
        SPECIAL_HIGH_EXTENDED
    } else {
        SPECIAL_HIGH
    };

    match c {
        'a'..='z' => CharKind::Class(CharClass::Lower),
        'A'..='Z' => CharKind::Class(CharClass::Upper),
        '0'..='9' => CharKind::Class(CharClass::Digit),
        _ if (SPECIAL_LOW..=special_high).contains(&u32::from(c)) => {
            CharKind::Class(CharClass::Special)
        },
        _ => CharKind::Invalid,
    }
}

/// Per-class character counts of a password
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClassCounts {
    pub lower: usize,
    pub upper: usize,
    pub digit: usize,
    pub special: usize,
}

impl ClassCounts {
    /// Count every character, stopping at the first invalid one
    pub fn tally(password: &str, extended: bool) -> ValidationResult<Self> {
        let mut counts = Self::default();
        for c in password.chars() {
            match classify(c, extended) {
                CharKind::Class(CharClass::Lower) => counts.lower += 1,
                CharKind::Class(CharClass::Upper) => counts.upper += 1,
                CharKind::Class(CharClass::Digit) => counts.digit += 1,
                CharKind::Class(CharClass::Special) => counts.special += 1,
                CharKind::Invalid => return Err(ValidationFailure::InvalidCharacter),
            }
        }
        Ok(counts)
    }
}

/// Check length bounds, then character classes in the order
/// lower, upper, digit, special.
pub fn validate_characters_and_length(
    password: &str,
    policy: &PolicyConfig,
) -> ValidationResult<()> {
    let len = password.chars().count();

    if len < policy.min_password_length {
        return Err(ValidationFailure::LengthViolation {
            bound: LengthBound::Min,
            threshold: policy.min_password_length,
        });
    }

    if len > policy.max_password_length {
        return Err(ValidationFailure::LengthViolation {
            bound: LengthBound::Max,
            threshold: policy.max_password_length,
        });
    }

    let counts = ClassCounts::tally(password, policy.allow_extended_symbols)?;

    let minimums = [
        (CharClass::Lower, counts.lower, policy.min_lower_alpha),
        (CharClass::Upper, counts.upper, policy.min_upper_alpha),
        (CharClass::Digit, counts.digit, policy.min_digits),
        (CharClass::Special, counts.special, policy.min_special),
    ];

    for (class, found, threshold) in minimums {
        if found < threshold {
            return Err(ValidationFailure::CharacterClassViolation { class, threshold });
        }
    }

    Ok(())
}
