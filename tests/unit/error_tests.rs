//! Unit tests for the error module
use password_policy_lib::{ConfigError, LengthBound, PatternKind, ValidationFailure};

#[test]
fn test_failure_messages_name_thresholds() {
    let failure = ValidationFailure::LengthViolation {
        bound: LengthBound::Max,
        threshold: 64,
    };
    assert_eq!(
        failure.to_string(),
        "The password must be at most 64 characters in length."
    );

    let failure = ValidationFailure::InsufficientChangeFromLast {
        required_distance: 6,
    };
    assert_eq!(
        failure.to_string(),
        "The password must differ by at least 6 characters."
    );

    let failure = ValidationFailure::ForbiddenPattern {
        kind: PatternKind::Date,
    };
    assert_eq!(failure.to_string(), "Your password cannot contain dates.");
}

#[test]
fn test_failure_report() {
    let report = ValidationFailure::RecentlyReused { history_depth: 24 }.to_report();
    assert_eq!(report["code"], "PCV_008");
    assert!(report["message"]
        .as_str()
        .unwrap()
        .contains("last 24 password changes"));

    let encoded = serde_json::to_string(&report).unwrap();
    assert!(encoded.contains("\"code\":\"PCV_008\""));
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::LengthBounds { min: 20, max: 10 };
    assert_eq!(err.to_string(), "Minimum password length 20 exceeds maximum 10");

    assert_eq!(
        ConfigError::AlreadyConfigured.to_string(),
        "Password policy is already configured"
    );
    assert!(ConfigError::AccuracyOutOfRange(2.0)
        .to_string()
        .contains("(0, 1]"));
}
