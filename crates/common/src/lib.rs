// ================
// common/src/lib.rs
// ================
//! Common types shared between the password policy engine and its front ends.
//! This module defines the policy snapshot and the small vocabularies used in
//! failure reports.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default minimum password length
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 15;
/// Default maximum password length
pub const DEFAULT_MAX_PASSWORD_LENGTH: usize = 50;
/// Default required edit distance from the previous password
pub const DEFAULT_MIN_EDIT_DISTANCE: usize = 4;
/// Default number of previous passwords scanned for reuse
pub const DEFAULT_HISTORY_DEPTH: usize = 10;

/// Tunable thresholds and flags for password acceptance.
///
/// A policy is built once (usually from a settings file) and treated as
/// read-only afterwards. Every field falls back to its default when absent
/// from the source document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PolicyConfig {
    /// Inclusive minimum length, in characters
    pub min_password_length: usize,
    /// Inclusive maximum length, in characters
    pub max_password_length: usize,
    /// Minimum number of `a`-`z` characters
    pub min_lower_alpha: usize,
    /// Minimum number of `A`-`Z` characters
    pub min_upper_alpha: usize,
    /// Minimum number of `0`-`9` characters
    pub min_digits: usize,
    /// Minimum number of symbol characters
    pub min_special: usize,
    /// Accept 0x80-0xFF as symbols in addition to printable ASCII
    pub allow_extended_symbols: bool,
    /// Required Levenshtein distance from the most recent password
    pub min_edit_distance_from_last: usize,
    /// How many previous passwords are checked for exact reuse
    pub history_depth: usize,
    /// Reject passwords the dictionary oracle flags
    pub restricted_by_dictionary: bool,
    pub allow_phone_numbers: bool,
    pub allow_dates: bool,
    /// Share of the password that must be covered by dictionary words
    pub dictionary_accuracy: f32,
    /// Shortest dictionary word considered a match
    pub dictionary_min_word_length: usize,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            max_password_length: DEFAULT_MAX_PASSWORD_LENGTH,
            min_lower_alpha: 1,
            min_upper_alpha: 1,
            min_digits: 1,
            min_special: 1,
            allow_extended_symbols: false,
            min_edit_distance_from_last: DEFAULT_MIN_EDIT_DISTANCE,
            history_depth: DEFAULT_HISTORY_DEPTH,
            restricted_by_dictionary: true,
            allow_phone_numbers: false,
            allow_dates: false,
            dictionary_accuracy: 0.75,
            dictionary_min_word_length: 4,
        }
    }
}

/// Which end of the length range was violated
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LengthBound {
    Min,
    Max,
}

impl fmt::Display for LengthBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthBound::Min => write!(f, "at least"),
            LengthBound::Max => write!(f, "at most"),
        }
    }
}

/// Character classes with a configurable minimum count
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    Lower,
    Upper,
    Digit,
    Special,
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharClass::Lower => write!(f, "lowercase alpha (a-z)"),
            CharClass::Upper => write!(f, "uppercase alpha (A-Z)"),
            CharClass::Digit => write!(f, "numerical (0-9)"),
            CharClass::Special => write!(f, "special (symbols such as: !@#)"),
        }
    }
}

/// Substring shapes a policy may forbid
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    Date,
    Phone,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternKind::Date => write!(f, "dates"),
            PatternKind::Phone => write!(f, "phone numbers"),
        }
    }
}
