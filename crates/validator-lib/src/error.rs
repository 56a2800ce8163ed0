// crates/validator-lib/src/error.rs

//! Central error types for password validation and configuration.
use password_policy_common::{CharClass, LengthBound, PatternKind};
use std::path::PathBuf;
use thiserror::Error;

/// Why a candidate password was not accepted
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationFailure {
    #[error("You cannot have a null password.")]
    NullOrEmptyInput,

    #[error("The password must be {bound} {threshold} characters in length.")]
    LengthViolation { bound: LengthBound, threshold: usize },

    #[error("The password must contain at least {threshold} {class} characters.")]
    CharacterClassViolation { class: CharClass, threshold: usize },

    #[error("Invalid password character entered. You can use: a-z, A-Z, 0-9, symbols")]
    InvalidCharacter,

    #[error("Your password cannot contain {kind}.")]
    ForbiddenPattern { kind: PatternKind },

    #[error("Your password cannot contain dictionary words.")]
    DictionaryMatch,

    #[error("Error attempting to load the dictionary: {reason}")]
    DictionaryUnavailable { reason: String },

    #[error("The password must differ by at least {required_distance} characters.")]
    InsufficientChangeFromLast { required_distance: usize },

    #[error("You may not use a password which has been used within the last {history_depth} password changes.")]
    RecentlyReused { history_depth: usize },

    #[error("Edit distance inputs must not be absent")]
    InvalidDistanceInput,
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationFailure>;

impl ValidationFailure {
    /// Get the stable error code for this failure
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationFailure::NullOrEmptyInput => "PCV_001",
            ValidationFailure::LengthViolation { .. } => "PCV_002",
            ValidationFailure::CharacterClassViolation { .. } => "PCV_003",
            ValidationFailure::InvalidCharacter => "PCV_004",
            ValidationFailure::ForbiddenPattern { .. } => "PCV_005",
            ValidationFailure::DictionaryMatch => "PCV_006",
            ValidationFailure::InsufficientChangeFromLast { .. } => "PCV_007",
            ValidationFailure::RecentlyReused { .. } => "PCV_008",
            ValidationFailure::DictionaryUnavailable { .. } => "PCV_101",
            ValidationFailure::InvalidDistanceInput => "PCV_102",
        }
    }

    /// Whether the failure is a verdict on the password rather than a fault
    /// in the validator or its collaborators
    pub fn is_policy_violation(&self) -> bool {
        !matches!(
            self,
            ValidationFailure::DictionaryUnavailable { .. }
                | ValidationFailure::InvalidDistanceInput
        )
    }

    /// Render the failure as a JSON object with code and message
    pub fn to_report(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.error_code(),
            "message": self.to_string(),
        })
    }
}

impl From<DictionaryUnavailable> for ValidationFailure {
    fn from(err: DictionaryUnavailable) -> Self {
        ValidationFailure::DictionaryUnavailable {
            reason: err.to_string(),
        }
    }
}

/// The dictionary word list could not be loaded
#[derive(Error, Debug)]
#[error("word list {} could not be loaded: {reason}", .path.display())]
pub struct DictionaryUnavailable {
    pub path: PathBuf,
    pub reason: String,
}

/// Configuration could not be loaded or is inconsistent
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Minimum password length {min} exceeds maximum {max}")]
    LengthBounds { min: usize, max: usize },

    #[error("Dictionary accuracy must be within (0, 1], got {0}")]
    AccuracyOutOfRange(f32),

    #[error("Dictionary minimum word length must be at least 1, got {0}")]
    InvalidMinWordLength(usize),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("Password policy is already configured")]
    AlreadyConfigured,

    #[error("Failed to load settings: {0}")]
    Load(#[from] figment::Error),
}
